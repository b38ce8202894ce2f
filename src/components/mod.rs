//! Reusable view pieces shared across pages.

pub mod nav_bar;
pub mod recipe_card;
pub mod upload_image;
