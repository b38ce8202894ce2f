//! Route parameter helpers.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Parse a `:id` route segment into a recipe id.
///
/// Only plain non-negative decimal strings are accepted; anything else is
/// treated as an invalid route rather than a backend lookup.
pub fn parse_recipe_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
