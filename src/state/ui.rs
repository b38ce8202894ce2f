//! Local UI chrome state.
//!
//! Keeps presentation concerns out of session and recipe data so the nav
//! chrome can evolve independently of the wire schema.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared across pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
}
