//! Small form-field helpers shared by the form pages.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Optional text fields map blank input to "not provided".
pub fn none_if_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}
