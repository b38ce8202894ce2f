//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login
//! redirects and identity-dependent rendering. The `RwSignal<AuthState>`
//! is constructed once in `App` and handed to everything else via context;
//! [`refresh`] is the only place that writes to it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    /// A fresh session starts in the loading state — the startup "who am I"
    /// call is treated as already in flight, so guards hold instead of
    /// bouncing to login before the answer arrives.
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Mark a refresh as in flight.
    pub fn begin_refresh(&mut self) {
        self.loading = true;
    }

    /// Apply the result of a "who am I" call; `None` means signed out.
    pub fn finish_refresh(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    /// Whether a user is present and loading has settled.
    pub fn authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }
}

/// Re-fetch the current user and update the shared session signal.
///
/// Overlapping calls are not cancelled or deduplicated: each one flips
/// `loading` on and applies its own result, so the last call to complete
/// wins. With a single backend session per browser all racers resolve to
/// the same answer.
pub async fn refresh(auth: RwSignal<AuthState>) {
    auth.update(AuthState::begin_refresh);
    let user = crate::net::api::fetch_current_user().await;
    auth.update(|state| state.finish_refresh(user));
}
