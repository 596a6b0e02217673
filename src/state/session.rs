//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<SessionState>` provided from the app root is the sole source
//! of truth for "who is logged in". The route guard and the navbar read it;
//! only the boot verifier and the auth pages mutate it, and every mutation
//! keeps localStorage in step so the session survives a reload.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::storage;

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Process start; nothing known yet.
    #[default]
    Unknown,
    /// A persisted token exists and is being checked against the backend.
    Verifying,
    Authenticated,
    Unauthenticated,
}

/// Current session: status plus credentials when authenticated.
///
/// Invariant: `token` and `user` are `Some` iff `status` is `Authenticated`.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub status: SessionStatus,
    pub token: Option<String>,
    pub user: Option<User>,
}

/// Decide the boot outcome for persisted credentials: return them for
/// restoration only when both halves were present and the backend verified
/// the token; anything else resolves to a cleared session.
pub fn resolve_boot(
    creds: Option<(String, User)>,
    verified: bool,
) -> Option<(String, User)> {
    match creds {
        Some(creds) if verified => Some(creds),
        _ => None,
    }
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// Whether boot verification has finished, one way or the other.
    pub fn is_resolved(&self) -> bool {
        matches!(self.status, SessionStatus::Authenticated | SessionStatus::Unauthenticated)
    }

    /// Mark the session authenticated and persist the credentials.
    pub fn set(&mut self, token: String, user: User) {
        storage::persist_session(&token, &user);
        self.token = Some(token);
        self.user = Some(user);
        self.status = SessionStatus::Authenticated;
    }

    /// Mark the session authenticated from already-persisted credentials
    /// (boot path after a successful verify; nothing is re-written).
    pub fn restore(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
        self.status = SessionStatus::Authenticated;
    }

    /// Drop the session and erase the persisted credentials. Purely local.
    pub fn clear(&mut self) {
        storage::clear_session();
        self.token = None;
        self.user = None;
        self.status = SessionStatus::Unauthenticated;
    }
}
