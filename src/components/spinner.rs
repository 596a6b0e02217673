//! Full-height loading indicator.

use leptos::prelude::*;

/// Shown while the session verifier is still deciding who the visitor is,
/// and anywhere else a whole view is pending.
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="spinner">
            <div class="spinner__circle" aria-hidden="true"></div>
            <p class="spinner__label">"Cargando..."</p>
        </div>
    }
}
