use super::*;

fn make_user() -> User {
    User { id: 1, username: "alice".to_owned() }
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn default_session_starts_loading_with_no_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(!state.authenticated());
}

#[test]
fn begin_refresh_sets_loading() {
    let mut state = AuthState { user: Some(make_user()), loading: false };
    state.begin_refresh();
    assert!(state.loading);
    // A refresh does not forget the user until the new answer arrives.
    assert!(state.user.is_some());
}

#[test]
fn finish_refresh_with_user_authenticates() {
    let mut state = AuthState::default();
    state.finish_refresh(Some(make_user()));
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().map(|u| u.id), Some(1));
    assert!(state.authenticated());
}

#[test]
fn finish_refresh_without_user_clears_session() {
    let mut state = AuthState { user: Some(make_user()), loading: true };
    state.finish_refresh(None);
    assert!(!state.loading);
    assert!(state.user.is_none());
    assert!(!state.authenticated());
}

#[test]
fn loading_session_is_not_authenticated_even_with_user() {
    let state = AuthState { user: Some(make_user()), loading: true };
    assert!(!state.authenticated());
}
