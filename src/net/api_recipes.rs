//! REST wrappers for the recipe and AI-generation endpoints.
//!
//! Unlike the auth wrappers, a non-OK status here is an `Err` with a
//! user-presentable message — there is no "expected rejection" case for
//! cookbook CRUD; the views render the message in their failure state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_recipes_test.rs"]
mod api_recipes_test;

use super::types::{GenerateRequest, GeneratedRecipe, Recipe, RecipeCreate, RecipeUpdate};

#[cfg(any(test, feature = "hydrate"))]
fn recipe_endpoint(id: i64) -> String {
    format!("/api/recipes/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn user_recipes_endpoint(user_id: i64) -> String {
    format!("/api/recipes/user/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn recipes_request_failed_message(status: u16) -> String {
    format!("recipe request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn update_failed_message(status: u16) -> String {
    format!("failed to update recipe (status {status})")
}

#[cfg(any(test, feature = "hydrate"))]
fn generate_failed_message(status: u16) -> String {
    format!("generation request failed: {status}")
}

/// Fetch every recipe for the community feed via `GET /api/recipes`.
///
/// # Errors
///
/// Returns a message string on transport failure or a non-OK status.
pub async fn list_recipes() -> Result<Vec<Recipe>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/recipes")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(recipes_request_failed_message(resp.status()));
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch one user's cookbook via `GET /api/recipes/user/{user_id}`.
///
/// # Errors
///
/// Returns a message string on transport failure or a non-OK status.
pub async fn list_user_recipes(user_id: i64) -> Result<Vec<Recipe>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&user_recipes_endpoint(user_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(recipes_request_failed_message(resp.status()));
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Err("not available on server".to_owned())
    }
}

/// Fetch a single recipe via `GET /api/recipes/{id}`.
///
/// # Errors
///
/// Returns a message string on transport failure or a non-OK status.
pub async fn get_recipe(id: i64) -> Result<Recipe, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&recipe_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(recipes_request_failed_message(resp.status()));
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Save a new recipe via `POST /api/recipes`.
///
/// # Errors
///
/// Returns a message string on transport failure or a non-OK status.
pub async fn create_recipe(payload: &RecipeCreate) -> Result<Recipe, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/recipes")
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(recipes_request_failed_message(resp.status()));
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}

/// Update a recipe via `PUT /api/recipes/{id}`.
///
/// # Errors
///
/// Prefers the backend's `detail` message on a non-OK status; falls back to
/// a status-derived message, or a transport error string.
pub async fn update_recipe(id: i64, payload: &RecipeUpdate) -> Result<Recipe, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&recipe_endpoint(id))
            .json(payload)
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
            return Err(detail.unwrap_or_else(|| update_failed_message(status)));
        }
        resp.json().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, payload);
        Err("not available on server".to_owned())
    }
}

/// Delete a recipe via `DELETE /api/recipes/{id}`.
///
/// # Errors
///
/// Returns a message string on transport failure or a non-OK status.
pub async fn delete_recipe(id: i64) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&recipe_endpoint(id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(recipes_request_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

/// Generate recipe suggestions via `POST /api/generate`.
///
/// The response envelope varies; see [`super::types::parse_generated`].
///
/// # Errors
///
/// Returns a message string on transport failure or a non-OK status.
pub async fn generate_recipes(request: &GenerateRequest) -> Result<Vec<GeneratedRecipe>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/generate")
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(generate_failed_message(resp.status()));
        }
        let body: serde_json::Value = resp.json().await.map_err(|e| e.to_string())?;
        Ok(super::types::parse_generated(&body))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err("not available on server".to_owned())
    }
}
