//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing chrome and shared widgets; only the navbar
//! reads session state, everything else is presentational.

pub mod faq;
pub mod features;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod products;
pub mod spinner;
