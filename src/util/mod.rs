//! Utility helpers shared across pages and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, routing
//! redirects) from page and component logic to improve reuse and testability.

pub mod guard;
pub mod storage;
