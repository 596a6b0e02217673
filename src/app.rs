//! Application root: session bootstrap, shared context, and routing.
//!
//! ARCHITECTURE
//! ============
//! The session signal is created here and provided to every page via context.
//! The verifier runs exactly once per load, before the router body renders
//! anything: until the session resolves, all routes fall back to the spinner,
//! which is the one ordering guarantee the guarded pages rely on.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::navbar::Navbar;
use crate::components::spinner::LoadingSpinner;
use crate::pages::create_raffle::CreateRafflePage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::state::session::SessionState;

/// HTML document shell used by the SSR host.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Session verifier: one run per load, browser only. SSR leaves the
    // status Unknown so the server renders the loading shell.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::session::{SessionStatus, resolve_boot};
        use crate::util::storage;

        let creds = storage::load_token().zip(storage::load_user());
        let verified = match &creds {
            Some((token, _)) => {
                session.update(|s| s.status = SessionStatus::Verifying);
                crate::net::api::verify_token(token).await
            }
            None => false,
        };
        match resolve_boot(creds, verified) {
            Some((token, user)) => session.update(|s| s.restore(token, user)),
            // Stale or rejected credentials are not kept around.
            None => session.update(SessionState::clear),
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/rifacil.css" />
        <Title text="Rifácil" />
        <Router>
            <Navbar />
            <Show when=move || session.get().is_resolved() fallback=|| view! { <LoadingSpinner /> }>
                <Routes fallback=|| view! { <Redirect path="/" /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                    <Route path=path!("/crear-rifa") view=CreateRafflePage />
                </Routes>
            </Show>
        </Router>
    }
}
