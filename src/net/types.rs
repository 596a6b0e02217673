//! Wire DTOs for the Rifácil backend API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's Spanish field names so serde maps the
//! payloads without a translation layer. Where the backend is loose about
//! scalar types (numeric booleans, numeric ids), custom deserializers absorb
//! the slack instead of every caller handling both shapes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated user as returned by the login endpoint and persisted
/// alongside the session token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub id: String,
    /// First name.
    pub nombre: String,
    /// Surname, if the backend supplied one.
    #[serde(default)]
    pub apellido: Option<String>,
    /// Account email.
    #[serde(default)]
    pub correo_electronico: Option<String>,
    /// Account category; gates raffle creation.
    pub tipo_usuario: UserKind,
    /// Elevated (administrative) privileges flag. The backend stores this as
    /// a 0/1 integer.
    #[serde(default, deserialize_with = "deserialize_bool_from_anything")]
    pub es_operador: bool,
}

impl User {
    /// Whether this account category may create raffles.
    pub fn can_create_raffles(&self) -> bool {
        matches!(self.tipo_usuario, UserKind::Persona | UserKind::Empresa)
    }
}

/// Account category as stored by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserKind {
    #[default]
    Persona,
    Empresa,
    Gobierno,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub correo_electronico: String,
    #[serde(rename = "contraseña")]
    pub password: String,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub usuario: User,
}

/// Body of `POST /api/auth/registrar`. The date is a `YYYY-MM-DD` string.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RegisterRequest {
    pub nombre: String,
    pub apellido: String,
    pub cedula: String,
    pub numero_telefono: String,
    pub correo_electronico: String,
    pub fecha_nacimiento: String,
    pub residencia: String,
    #[serde(rename = "contraseña")]
    pub password: String,
    pub tipo_usuario: UserKind,
}

/// A server-side validation failure scoped to one request field.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FieldError {
    pub param: String,
    pub msg: String,
}

/// Error body shared by the auth endpoints: either a general `msg`, a
/// per-field `errors` list, or both.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub errors: Vec<FieldError>,
}

/// The raffle the backend reports after a successful creation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RifaCreada {
    #[serde(deserialize_with = "deserialize_string_from_scalar")]
    pub id: String,
    pub nombre: String,
    #[serde(deserialize_with = "deserialize_u32_from_number")]
    pub cantidad_tickets: u32,
    pub valor_ticket: f64,
    pub valor_total_premios: f64,
    pub modalidad_tickets: String,
}

/// Extract the created raffle from a creation response body.
///
/// The backend returns either the raffle object directly or nested under a
/// `rifa` key; accept both.
pub fn parse_rifa_creada(body: &serde_json::Value) -> Option<RifaCreada> {
    let inner = body.get("rifa").unwrap_or(body);
    serde_json::from_value(inner.clone()).ok()
}

fn deserialize_string_from_scalar<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or number, got {other}"))),
    }
}

fn deserialize_u32_from_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let number = value
        .as_i64()
        .ok_or_else(|| D::Error::custom(format!("expected number, got {value}")))?;
    u32::try_from(number).map_err(|_| D::Error::custom(format!("value {number} out of range for u32")))
}

fn deserialize_bool_from_anything<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Bool(b) => Ok(b),
        serde_json::Value::Number(n) => Ok(n.as_i64().is_some_and(|v| v != 0)),
        other => Err(D::Error::custom(format!("expected bool or number, got {other}"))),
    }
}
