//! Networking modules for the backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the calls, `types` defines the wire schema, and `error`
//! classifies failures for the forms that triggered them.

pub mod api;
pub mod error;
pub mod types;
