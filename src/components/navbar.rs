//! Top navigation bar, aware of the current session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar is mounted once above the router, so it re-renders on every
//! session change: login swaps the auth buttons for the user menu, logout
//! swaps them back.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let display_name = move || {
        session
            .get()
            .user
            .map(|user| user.nombre)
            .unwrap_or_default()
    };
    let can_create = move || {
        session
            .get()
            .user
            .is_some_and(|user| user.can_create_raffles())
    };

    let on_logout = move |_| {
        session.update(SessionState::clear);
        navigate("/", leptos_router::NavigateOptions::default());
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">"Rifácil"</a>
            <nav class="navbar__links">
                <a href="/">"Inicio"</a>
                <a href="/nosotros">"Nosotros"</a>
                <a href="/blog">"Blog"</a>
            </nav>
            <Show
                when=move || session.get().is_authenticated()
                fallback=|| {
                    view! {
                        <div class="navbar__auth">
                            <a class="navbar__button" href="/login">"Iniciar Sesión"</a>
                            <a class="navbar__button navbar__button--accent" href="/register">
                                "Registrarse"
                            </a>
                        </div>
                    }
                }
            >
                <div class="navbar__auth">
                    <Show when=can_create>
                        <a class="navbar__button navbar__button--accent" href="/crear-rifa">
                            "Crear Rifa"
                        </a>
                    </Show>
                    <span class="navbar__user">{display_name}</span>
                    <button class="navbar__button" on:click=on_logout.clone()>
                        "Cerrar sesión"
                    </button>
                </div>
            </Show>
        </header>
    }
}
