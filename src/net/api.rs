//! REST calls to the Rifácil backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs that degrade to "not signed in" / connection
//! errors, since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure becomes an `ApiError` the calling form can display; no call
//! here panics or leaves a body unread on the error path.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::types::LoginRequest;
use super::types::{LoginResponse, RegisterRequest, RifaCreada};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
#[cfg(feature = "hydrate")]
use super::types::parse_rifa_creada;
use crate::state::draft::{RaffleDraft, SelectedImage};

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Fold a non-2xx response body into the error the form should show:
/// per-field errors when the server itemized them, otherwise its general
/// message, otherwise `fallback`.
#[cfg(any(test, feature = "hydrate"))]
fn classify_error_body(body: ErrorBody, fallback: &str) -> ApiError {
    if body.errors.is_empty() {
        ApiError::Server(body.msg.unwrap_or_else(|| fallback.to_owned()))
    } else {
        ApiError::Fields(body.errors)
    }
}

/// Check a persisted token against `GET /api/auth/verificar`.
///
/// Any failure (non-2xx or transport) counts as invalid; the caller clears
/// the stale credentials.
pub async fn verify_token(token: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        match gloo_net::http::Request::get("/api/auth/verificar")
            .header("Authorization", &bearer(token))
            .send()
            .await
        {
            Ok(resp) => resp.ok(),
            Err(_) => false,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        false
    }
}

/// Exchange credentials for a session via `POST /api/auth/login`.
///
/// # Errors
///
/// `ApiError::Server` with the backend's message on rejection,
/// `ApiError::Connection` when the request or body never made it.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = LoginRequest {
            correo_electronico: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|_| ApiError::Connection)?
            .send()
            .await
            .map_err(|_| ApiError::Connection)?;
        if resp.ok() {
            resp.json::<LoginResponse>().await.map_err(|_| ApiError::Connection)
        } else {
            let body: ErrorBody = resp.json().await.unwrap_or_default();
            Err(classify_error_body(body, "Error al iniciar sesión"))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Connection)
    }
}

/// Create an account via `POST /api/auth/registrar`. Success does not return
/// a session; the caller sends the user to the login screen.
///
/// # Errors
///
/// `ApiError::Fields` when the server itemized field problems, otherwise
/// `ApiError::Server` / `ApiError::Connection`.
pub async fn register(request: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/registrar")
            .json(request)
            .map_err(|_| ApiError::Connection)?
            .send()
            .await
            .map_err(|_| ApiError::Connection)?;
        if resp.ok() {
            Ok(())
        } else {
            let body: ErrorBody = resp.json().await.unwrap_or_default();
            Err(classify_error_body(body, "Error al registrar usuario"))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Connection)
    }
}

/// Create a raffle via a multipart `POST /api/rifas` with the bearer token.
///
/// Text parts come from [`RaffleDraft::multipart_fields`]; the image, when
/// present, is appended as the `imagen` part.
///
/// # Errors
///
/// `ApiError::Server`/`ApiError::Fields` on backend rejection,
/// `ApiError::Connection` on transport failure or an unreadable body.
pub async fn create_rifa(
    token: &str,
    draft: &RaffleDraft,
    image: Option<&SelectedImage>,
) -> Result<RifaCreada, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let form = web_sys::FormData::new().map_err(|_| ApiError::Connection)?;
        for (name, value) in draft.multipart_fields() {
            let _ = form.append_with_str(name, &value);
        }
        if let Some(image) = image {
            let _ = form.append_with_blob_and_filename("imagen", &image.file, &image.name);
        }
        let resp = gloo_net::http::Request::post("/api/rifas")
            .header("Authorization", &bearer(token))
            .body(form)
            .map_err(|_| ApiError::Connection)?
            .send()
            .await
            .map_err(|_| ApiError::Connection)?;
        let body: serde_json::Value = resp.json().await.unwrap_or(serde_json::Value::Null);
        if !resp.ok() {
            let parsed: ErrorBody = serde_json::from_value(body).unwrap_or_default();
            return Err(classify_error_body(parsed, "Error al crear la rifa"));
        }
        parse_rifa_creada(&body).ok_or(ApiError::Connection)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, draft, image);
        Err(ApiError::Connection)
    }
}
