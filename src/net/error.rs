//! Error taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! Every network failure surfaces as one of these variants; pages render the
//! `Display` text directly, so the messages are user-facing Spanish copy.
//! Nothing in this module panics.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::net::types::FieldError;

/// A failed backend call, classified for the form that triggered it.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Transport failure: network unreachable, timeout, unreadable body.
    #[error("Error de conexión. Intente nuevamente.")]
    Connection,
    /// The server rejected the request with a general message.
    #[error("{0}")]
    Server(String),
    /// The server rejected individual request fields; the form maps each
    /// `(param, msg)` pair back onto its input.
    #[error("Revise los campos marcados")]
    Fields(Vec<FieldError>),
    /// The operation requires a session token and none is stored. Fatal to
    /// the operation, not retryable.
    #[error("No se ha iniciado sesión")]
    NotSignedIn,
}
