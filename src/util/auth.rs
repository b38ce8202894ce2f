//! Shared auth/route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded route components should apply identical behavior: hold while the
//! session is resolving, redirect when it settles signed-out, and render
//! content otherwise. The decision itself is a pure function of session
//! state; only the redirect side effect touches the router.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

/// What a guarded route should do for a given session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    /// Session still resolving; render a neutral placeholder.
    Loading,
    /// Loading settled with no user; redirect to the login entry point.
    Unauthenticated,
    /// Render the guarded content.
    Authenticated,
}

/// Derive the guard decision from the session state.
pub fn decide(state: &AuthState) -> GuardState {
    if state.loading {
        GuardState::Loading
    } else if state.user.is_none() {
        GuardState::Unauthenticated
    } else {
        GuardState::Authenticated
    }
}

pub fn should_redirect_unauth(state: &AuthState) -> bool {
    decide(state) == GuardState::Unauthenticated
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
///
/// The redirect replaces the current history entry so Back cannot land
/// inside the guarded area. Re-runs on every session change, which also
/// covers logout while a guarded page is open.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
            navigate("/login", options);
        }
    });
}
