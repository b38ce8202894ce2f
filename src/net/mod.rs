//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the shared wire schema, and the `api*` modules wrap the
//! auth, recipe, and photo endpoints. Real HTTP runs only under `hydrate`;
//! SSR builds get inert stubs.

pub mod api;
pub mod api_photos;
pub mod api_recipes;
pub mod types;
