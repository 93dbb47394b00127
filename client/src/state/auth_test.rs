use super::*;

// =============================================================
// AuthState construction
// =============================================================

#[test]
fn auth_state_default_no_token() {
    let state = AuthState::default();
    assert!(state.token.is_none());
    assert!(!state.loading);
}

#[test]
fn restoring_is_loading_without_token() {
    let state = AuthState::restoring();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn from_token_settles_loading() {
    let state = AuthState::from_token(Some("jwt".to_owned()));
    assert!(!state.loading);
    assert_eq!(state.token.as_deref(), Some("jwt"));
    assert!(state.is_authenticated());
}

#[test]
fn from_token_treats_blank_as_absent() {
    assert!(!AuthState::from_token(Some("  ".to_owned())).is_authenticated());
    assert!(!AuthState::from_token(None).is_authenticated());
}
