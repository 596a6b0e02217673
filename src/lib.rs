//! Rifácil web client: marketing landing, auth screens, and the
//! create-raffle form, over an external HTTP backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` wires routing and the session bootstrap; `pages` hold route-level
//! orchestration; `net` speaks to the backend; `state` owns the domain
//! invariants; `util` isolates browser glue.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered
/// document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
