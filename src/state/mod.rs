//! Shared application state held in Leptos signals.
//!
//! DESIGN
//! ======
//! `session` is process-wide (provided via context from the app root);
//! `draft` is owned by the create-raffle page. Both are plain structs so the
//! invariants are testable without a browser.

pub mod draft;
pub mod session;
