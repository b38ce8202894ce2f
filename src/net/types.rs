//! Wire-schema DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! The backend speaks snake_case JSON and has shipped more than one shape for
//! some fields (numeric ids as strings, ingredient lists as bare strings or
//! `{name}` objects). Deserializers here tolerate every shape the backend has
//! produced and normalize to plain Rust types, so view code never touches raw
//! JSON.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    #[serde(deserialize_with = "deserialize_i64_tolerant")]
    pub id: i64,
    /// Login name, also shown in the nav chrome.
    pub username: String,
}

/// A recipe as stored in the cookbook.
///
/// Ingredient and instruction lists are normalized to plain strings in wire
/// order; the `{name}` / `{step_text, step_number}` wrapping only exists in
/// the write payloads below.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(deserialize_with = "deserialize_i64_tolerant")]
    pub id: i64,
    /// Owner of the recipe; 0 when the payload omits it.
    #[serde(default, deserialize_with = "deserialize_i64_tolerant")]
    pub user_id: i64,
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
    /// Total preparation time in minutes.
    #[serde(default, deserialize_with = "deserialize_i64_tolerant")]
    pub total_time: i64,
    #[serde(default, deserialize_with = "deserialize_flexible_strings")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_flexible_strings")]
    pub instructions: Vec<String>,
}

/// One ingredient in a recipe write payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientPayload {
    pub name: String,
}

/// One instruction step in a recipe write payload; steps are 1-based.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionPayload {
    pub step_text: String,
    pub step_number: i32,
}

/// Payload for `POST /api/recipes`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub total_time: i64,
    pub ingredients: Vec<IngredientPayload>,
    pub instructions: Vec<InstructionPayload>,
}

impl RecipeCreate {
    /// Wrap plain string lists into the wire shape, numbering steps from 1.
    pub fn from_parts(
        title: String,
        image_url: Option<String>,
        total_time: i64,
        ingredients: &[String],
        instructions: &[String],
    ) -> Self {
        Self {
            title,
            image_url,
            total_time,
            ingredients: wrap_ingredients(ingredients),
            instructions: wrap_instructions(instructions),
        }
    }

    /// Build a create payload from an AI generation result.
    pub fn from_generated(generated: &GeneratedRecipe) -> Self {
        Self::from_parts(
            generated.name.clone(),
            None,
            generated.total_time,
            &generated.ingredients,
            &generated.instructions,
        )
    }
}

/// Payload for `PUT /api/recipes/{id}`.
///
/// Every field is optional and unset fields are left out of the JSON, so a
/// photo upload can PUT just `image_url` without clobbering the rest.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredients: Option<Vec<IngredientPayload>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<Vec<InstructionPayload>>,
}

impl RecipeUpdate {
    /// Full edit of a recipe from the edit form.
    pub fn edit(
        title: String,
        image_url: Option<String>,
        total_time: i64,
        ingredients: &[String],
        instructions: &[String],
    ) -> Self {
        Self {
            title: Some(title),
            image_url,
            total_time: Some(total_time),
            ingredients: Some(wrap_ingredients(ingredients)),
            instructions: Some(wrap_instructions(instructions)),
        }
    }

    /// Update only the recipe's image, used after a photo upload.
    pub fn image_only(url: String) -> Self {
        Self { image_url: Some(url), ..Self::default() }
    }
}

fn wrap_ingredients(items: &[String]) -> Vec<IngredientPayload> {
    items.iter().map(|name| IngredientPayload { name: name.clone() }).collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn wrap_instructions(items: &[String]) -> Vec<InstructionPayload> {
    items
        .iter()
        .enumerate()
        .map(|(index, step_text)| InstructionPayload {
            step_text: step_text.clone(),
            step_number: index as i32 + 1,
        })
        .collect()
}

/// Login form input sent to `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Signup form input sent to `POST /api/auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupData {
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Profile edit sent to `PUT /api/auth/me`; password omitted = unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// `{success}` envelope returned by the auth endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub success: bool,
}

/// Response from the photo upload endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoResponse {
    pub photo_url: String,
}

/// Request body for `POST /api/generate`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub ingredients: Vec<String>,
    pub max_time: i64,
}

/// One AI-generated recipe suggestion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedRecipe {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_i64_tolerant")]
    pub total_time: i64,
    #[serde(default, deserialize_with = "deserialize_flexible_strings")]
    pub ingredients: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_flexible_strings")]
    pub instructions: Vec<String>,
}

/// Extract the generated recipes from whatever envelope the backend used.
///
/// The generation endpoint has returned a bare array, `{recipes: [...]}`,
/// and `{result: <json string | object>}` at various points; all are
/// accepted. Anything unparsable yields an empty list rather than an error.
pub fn parse_generated(value: &serde_json::Value) -> Vec<GeneratedRecipe> {
    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value.clone()).unwrap_or_default(),
        serde_json::Value::String(raw) => serde_json::from_str::<serde_json::Value>(raw)
            .map(|inner| parse_generated(&inner))
            .unwrap_or_default(),
        serde_json::Value::Object(map) => {
            if let Some(recipes) = map.get("recipes") {
                if recipes.is_array() {
                    return serde_json::from_value(recipes.clone()).unwrap_or_default();
                }
            }
            match map.get("result") {
                Some(result) => parse_generated(result),
                None => Vec::new(),
            }
        }
        _ => Vec::new(),
    }
}

/// Pull the human-readable `detail` message out of an error body, if any.
pub fn error_detail(body: &serde_json::Value) -> Option<String> {
    body.get("detail").and_then(serde_json::Value::as_str).map(ToOwned::to_owned)
}

fn deserialize_flexible_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Vec::<serde_json::Value>::deserialize(deserializer)?;
    Ok(items.iter().map(flexible_string).collect())
}

/// Normalize one wire list item to a plain string.
///
/// Accepts bare strings and `{name}` / `{step_text}` / `{step}` objects;
/// anything else becomes an empty string instead of a parse failure.
fn flexible_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Object(map) => ["name", "step_text", "step"]
            .iter()
            .find_map(|key| map.get(*key).and_then(serde_json::Value::as_str))
            .unwrap_or_default()
            .to_owned(),
        _ => String::new(),
    }
}

fn deserialize_i64_tolerant<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(text) => text
            .parse()
            .map_err(|_| D::Error::custom(format!("expected numeric string, got {text:?}"))),
        _ => Err(D::Error::custom("expected number or numeric string")),
    }
}
