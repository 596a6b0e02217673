//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, submissions, redirects)
//! and delegates rendering details to `components`.

pub mod create_raffle;
pub mod home;
pub mod login;
pub mod register;
