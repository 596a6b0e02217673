use super::*;
use crate::net::types::UserKind;

fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        nombre: "Ana".to_owned(),
        apellido: None,
        correo_electronico: None,
        tipo_usuario: UserKind::Persona,
        es_operador: false,
    }
}

#[test]
fn starts_unknown_and_unresolved() {
    let state = SessionState::default();
    assert_eq!(state.status, SessionStatus::Unknown);
    assert!(!state.is_resolved());
    assert!(!state.is_authenticated());
}

#[test]
fn set_authenticates_and_holds_credentials() {
    let mut state = SessionState::default();
    state.set("abc".to_owned(), sample_user());
    assert!(state.is_authenticated());
    assert!(state.is_resolved());
    assert_eq!(state.token.as_deref(), Some("abc"));
    assert_eq!(state.user.as_ref().map(|u| u.nombre.as_str()), Some("Ana"));
}

#[test]
fn clear_resolves_unauthenticated_and_drops_credentials() {
    let mut state = SessionState::default();
    state.set("abc".to_owned(), sample_user());
    state.clear();
    assert_eq!(state.status, SessionStatus::Unauthenticated);
    assert!(state.is_resolved());
    assert!(state.token.is_none());
    assert!(state.user.is_none());
}

#[test]
fn verifying_is_not_resolved() {
    let state = SessionState { status: SessionStatus::Verifying, ..SessionState::default() };
    assert!(!state.is_resolved());
    assert!(!state.is_authenticated());
}

#[test]
fn boot_restores_verified_credentials() {
    let outcome = resolve_boot(Some(("abc".to_owned(), sample_user())), true);
    assert_eq!(outcome, Some(("abc".to_owned(), sample_user())));
}

#[test]
fn boot_with_rejected_token_resolves_unauthenticated_with_nothing_kept() {
    // A persisted token the backend refuses must not survive boot.
    let mut state = SessionState { status: SessionStatus::Verifying, ..SessionState::default() };
    match resolve_boot(Some(("stale".to_owned(), sample_user())), false) {
        Some((token, user)) => state.restore(token, user),
        None => state.clear(),
    }
    assert_eq!(state.status, SessionStatus::Unauthenticated);
    assert!(state.token.is_none());
    assert!(state.user.is_none());
}

#[test]
fn boot_without_persisted_credentials_clears() {
    assert_eq!(resolve_boot(None, false), None);
    assert_eq!(resolve_boot(None, true), None);
}

#[test]
fn restore_matches_set_without_touching_storage() {
    let mut restored = SessionState::default();
    restored.restore("abc".to_owned(), sample_user());
    assert!(restored.is_authenticated());
    assert_eq!(restored.token.as_deref(), Some("abc"));
}
