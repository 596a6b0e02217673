//! Route guarding from session status.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route-level page applies the same decision table, so redirects stay
//! consistent whether the session changes at boot, after a login, or on a
//! logout. The table is a pure function; the effect wrapper wires it to the
//! router.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionState, SessionStatus};

/// How a route relates to authentication.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteKind {
    /// Anyone may view (landing page).
    Public,
    /// Requires an authenticated session (create-raffle).
    Protected,
    /// Only for signed-out visitors (login, register).
    AuthOnly,
}

/// What the router should do with a requested route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session not resolved yet; render the loading placeholder only.
    Loading,
    Render,
    RedirectLogin,
    RedirectHome,
}

/// Decide how to treat a route of `kind` under the given session status.
pub fn route_decision(status: SessionStatus, kind: RouteKind) -> RouteDecision {
    if matches!(status, SessionStatus::Unknown | SessionStatus::Verifying) {
        return RouteDecision::Loading;
    }
    let authenticated = status == SessionStatus::Authenticated;
    match kind {
        RouteKind::Protected if !authenticated => RouteDecision::RedirectLogin,
        RouteKind::AuthOnly if authenticated => RouteDecision::RedirectHome,
        RouteKind::Public | RouteKind::Protected | RouteKind::AuthOnly => RouteDecision::Render,
    }
}

/// Re-evaluate the guard whenever the session signal changes and navigate
/// when the decision calls for a redirect.
pub fn install_guard<F>(session: RwSignal<SessionState>, kind: RouteKind, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || match route_decision(session.get().status, kind) {
        RouteDecision::RedirectLogin => navigate("/login", NavigateOptions::default()),
        RouteDecision::RedirectHome => navigate("/", NavigateOptions::default()),
        RouteDecision::Loading | RouteDecision::Render => {}
    });
}
