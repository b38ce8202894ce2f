use super::*;
use crate::net::types::User;

fn signed_in() -> AuthState {
    AuthState { user: Some(User { id: 1, username: "alice".to_owned() }), loading: false }
}

// =============================================================
// Guard decision matrix
// =============================================================

#[test]
fn loading_session_holds() {
    let state = AuthState { user: None, loading: true };
    assert_eq!(decide(&state), GuardState::Loading);
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn settled_session_without_user_redirects() {
    let state = AuthState { user: None, loading: false };
    assert_eq!(decide(&state), GuardState::Unauthenticated);
    assert!(should_redirect_unauth(&state));
}

#[test]
fn settled_session_with_user_renders_content() {
    let state = signed_in();
    assert_eq!(decide(&state), GuardState::Authenticated);
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn loading_session_with_stale_user_still_holds() {
    let mut state = signed_in();
    state.loading = true;
    assert_eq!(decide(&state), GuardState::Loading);
}
