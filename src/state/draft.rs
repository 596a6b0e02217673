//! Raffle draft: domain model, prize-list invariants, and submit pipeline.
//!
//! DESIGN
//! ======
//! The draft is one plain struct mutated through a `RwSignal` by the form
//! page. Two invariants are owned here, not by the UI: prize positions are
//! always a contiguous 1..=N sequence in list order, and the prize total is a
//! pure function of the list (computed on read, so it cannot go stale).
//! Validation and multipart field assembly are plain functions so the whole
//! pipeline short of the actual request is testable natively.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use serde::Serialize;

/// Ticket sale mode. Wire values are the backend's Spanish names.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketMode {
    #[default]
    Limitado,
    Ilimitado,
}

impl TicketMode {
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Limitado => "limitado",
            Self::Ilimitado => "ilimitado",
        }
    }
}

/// Raffle tier selected by the organizer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrizeTier {
    #[default]
    Minirifa,
    Superrifa,
    Maxirifa,
}

impl PrizeTier {
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Minirifa => "minirifa",
            Self::Superrifa => "superrifa",
            Self::Maxirifa => "maxirifa",
        }
    }
}

/// What kind of prize a line item is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrizeKind {
    #[default]
    Monetario,
    Fisico,
    Servicio,
}

/// One prize line item. `posicion` is the 1-based rank in the list.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Premio {
    pub descripcion: String,
    pub valor: f64,
    pub tipo: PrizeKind,
    pub posicion: u32,
}

impl Premio {
    fn blank(posicion: u32) -> Self {
        Self { descripcion: String::new(), valor: 0.0, tipo: PrizeKind::Monetario, posicion }
    }
}

/// The raffle being drafted. Dates are `YYYY-MM-DD` strings straight from the
/// date inputs; `hora_sorteo` is `HH:MM` from the time input and is widened
/// to `HH:MM:SS` at assembly time.
#[derive(Clone, Debug, PartialEq)]
pub struct RaffleDraft {
    pub nombre: String,
    pub modalidad_tickets: TicketMode,
    pub cantidad_tickets: u32,
    pub valor_ticket: f64,
    pub fecha_inicio: String,
    pub fecha_fin: String,
    pub hora_sorteo: String,
    pub modalidad_premio: PrizeTier,
    pub comision_operador: f64,
    pub regalias: f64,
    pub premios: Vec<Premio>,
}

impl Default for RaffleDraft {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            modalidad_tickets: TicketMode::Limitado,
            cantidad_tickets: 100,
            valor_ticket: 0.0,
            fecha_inicio: String::new(),
            fecha_fin: String::new(),
            hora_sorteo: String::new(),
            modalidad_premio: PrizeTier::Minirifa,
            comision_operador: 5.0,
            regalias: 0.0,
            premios: vec![Premio::blank(1)],
        }
    }
}

impl RaffleDraft {
    /// Sum of all prize values. Derived on read; never stored.
    pub fn total_prize_value(&self) -> f64 {
        self.premios.iter().map(|p| p.valor).sum()
    }

    /// Append a blank prize at the end of the list.
    pub fn add_premio(&mut self) {
        let posicion = u32::try_from(self.premios.len()).unwrap_or(u32::MAX).saturating_add(1);
        self.premios.push(Premio::blank(posicion));
    }

    /// Remove the prize at `index` and renumber the rest. The last remaining
    /// prize cannot be removed; the list is never empty.
    pub fn remove_premio(&mut self, index: usize) {
        if self.premios.len() <= 1 || index >= self.premios.len() {
            return;
        }
        self.premios.remove(index);
        self.renumber();
    }

    fn renumber(&mut self) {
        for (i, premio) in self.premios.iter_mut().enumerate() {
            premio.posicion = u32::try_from(i).unwrap_or(u32::MAX).saturating_add(1);
        }
    }

    /// Submit-time validation. Rules run in order; the first violation aborts
    /// with its message and nothing is sent.
    pub fn validate(&self) -> Result<(), String> {
        if self.nombre.trim().is_empty() {
            return Err("El nombre de la rifa es obligatorio".to_owned());
        }
        if self.valor_ticket <= 0.0 {
            return Err("El valor del boleto debe ser mayor a 0".to_owned());
        }
        if self.modalidad_tickets == TicketMode::Limitado && self.cantidad_tickets == 0 {
            return Err("La cantidad de boletos debe ser mayor a 0".to_owned());
        }
        if self.premios.is_empty() {
            return Err("Debe agregar al menos un premio".to_owned());
        }
        if self.premios.iter().any(|p| p.descripcion.trim().is_empty() || p.valor <= 0.0) {
            return Err("Todos los premios deben tener descripción y valor mayor a 0".to_owned());
        }
        Ok(())
    }

    /// Assemble the text parts of the creation request in wire order. The
    /// image, when present, is appended separately as the `imagen` part.
    pub fn multipart_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("nombre", self.nombre.clone()),
            ("modalidad_tickets", self.modalidad_tickets.wire_name().to_owned()),
            ("cantidad_tickets", self.cantidad_tickets.to_string()),
            ("valor_ticket", self.valor_ticket.to_string()),
            ("fecha_inicio", self.fecha_inicio.clone()),
            ("fecha_fin", self.fecha_fin.clone()),
            ("hora_sorteo", normalize_draw_time(&self.hora_sorteo)),
            ("modalidad_premio", self.modalidad_premio.wire_name().to_owned()),
            ("valor_total_premios", self.total_prize_value().to_string()),
            ("comision_operador", self.comision_operador.to_string()),
            ("regalias", self.regalias.to_string()),
            ("premios", serde_json::to_string(&self.premios).unwrap_or_else(|_| "[]".to_owned())),
        ]
    }
}

/// Widen an `HH:MM` time-input value to the backend's `HH:MM:SS`.
pub fn normalize_draw_time(raw: &str) -> String {
    match raw.bytes().filter(|b| *b == b':').count() {
        1 => format!("{raw}:00"),
        _ => raw.to_owned(),
    }
}

/// Hard cap on the raffle image attachment.
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

const ALLOWED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

/// Accept or reject a candidate image before it ever reaches a payload.
pub fn validate_image(mime: &str, bytes: u64) -> Result<(), String> {
    if !ALLOWED_IMAGE_TYPES.contains(&mime) {
        return Err("Solo se permiten archivos de imagen (JPEG, PNG, GIF)".to_owned());
    }
    if bytes > MAX_IMAGE_BYTES {
        return Err("La imagen no debe superar los 5MB".to_owned());
    }
    Ok(())
}

/// An image that already passed local validation. The live `File` handle only
/// exists in the browser; metadata is kept separately so the rest of the form
/// logic stays testable.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedImage {
    pub name: String,
    pub mime: String,
    pub size: u64,
    #[cfg(feature = "hydrate")]
    pub file: web_sys::File,
}

/// Where the form is in its submit lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmitPhase {
    /// Claim the in-flight slot. Returns `false` when a submission is already
    /// outstanding, so a second rapid click cannot produce a second request.
    pub fn begin(&mut self) -> bool {
        if *self == Self::Submitting {
            return false;
        }
        *self = Self::Submitting;
        true
    }
}
