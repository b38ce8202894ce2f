use super::*;

#[test]
fn default_is_idle() {
    let state = RequestState::<Vec<String>>::default();
    assert_eq!(state, RequestState::Idle);
    assert!(!state.is_pending());
    assert!(state.succeeded().is_none());
    assert!(state.error().is_none());
}

#[test]
fn pending_reports_in_flight() {
    let state = RequestState::<()>::Pending;
    assert!(state.is_pending());
    assert!(state.succeeded().is_none());
}

#[test]
fn succeeded_exposes_payload() {
    let state = RequestState::Succeeded(vec![1, 2, 3]);
    assert_eq!(state.succeeded(), Some(&vec![1, 2, 3]));
    assert!(state.error().is_none());
    assert!(!state.is_pending());
}

#[test]
fn failed_exposes_message() {
    let state = RequestState::<()>::Failed("recipe request failed: 500".to_owned());
    assert_eq!(state.error(), Some("recipe request failed: 500"));
    assert!(state.succeeded().is_none());
}
