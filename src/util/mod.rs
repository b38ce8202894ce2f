//! Cross-page helpers: route guarding, theme persistence, param parsing.

pub mod auth;
pub mod dark_mode;
pub mod form;
pub mod route;
