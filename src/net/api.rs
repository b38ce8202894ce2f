//! REST wrappers for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! An HTTP rejection (wrong password, taken username) is an `Ok(false)` —
//! the ordinary outcome of talking to the backend. `Err` is reserved for
//! transport-level failures, so callers can distinguish "bad credentials"
//! from "the network is down".

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::AuthResponse;
use super::types::{Credentials, ProfileUpdate, SignupData, User};

#[cfg(any(test, feature = "hydrate"))]
fn profile_update_failed_message(status: u16) -> String {
    format!("profile update failed: {status}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log in via `POST /api/auth/login`.
///
/// `Ok(false)` means the backend rejected the credentials.
///
/// # Errors
///
/// Returns an error string if the HTTP request itself fails.
pub async fn login(credentials: &Credentials) -> Result<bool, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(credentials)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Ok(false);
        }
        let body: AuthResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.success)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err("not available on server".to_owned())
    }
}

/// Log out the current session via `GET /api/auth/logout`.
///
/// # Errors
///
/// Returns an error string if the HTTP request itself fails.
pub async fn logout() -> Result<bool, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/logout")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Ok(false);
        }
        let body: AuthResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.success)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/signup`.
///
/// `Ok(false)` means the backend refused (username taken or invalid input).
///
/// # Errors
///
/// Returns an error string if the HTTP request itself fails.
pub async fn signup(signup_data: &SignupData) -> Result<bool, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/signup")
            .json(signup_data)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Ok(false);
        }
        let body: AuthResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.success)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = signup_data;
        Err("not available on server".to_owned())
    }
}

/// Update the signed-in user's profile via `PUT /api/auth/me`.
///
/// # Errors
///
/// Returns the backend's `detail` message when present, otherwise a
/// status-derived message, or a transport error string.
pub async fn update_profile(update: &ProfileUpdate) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put("/api/auth/me")
            .json(update)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let detail = resp
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| super::types::error_detail(&body));
            return Err(detail.unwrap_or_else(|| profile_update_failed_message(status)));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = update;
        Err("not available on server".to_owned())
    }
}
