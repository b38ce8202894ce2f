//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, validation, guard
//! installation) and delegates shared rendering to `components`.

pub mod community;
pub mod cookbook;
pub mod generator;
pub mod home;
pub mod login;
pub mod profile;
pub mod recipe_detail;
pub mod recipe_edit;
pub mod register;
