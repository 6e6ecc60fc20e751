//! Reactive mirror of the active theme.
//!
//! DESIGN
//! ======
//! The theme controller owns the document reflection (root class, toggle
//! pressed attributes); this state only mirrors the active theme into the
//! Leptos signal graph so components like the toggle icon re-render. It is
//! updated exclusively by the controller's `on_change` callback wired in
//! `app`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::util::theme::Theme;

/// Shared theme state provided as an `RwSignal` context.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub active: Theme,
}

impl ThemeState {
    #[must_use]
    pub fn new(active: Theme) -> Self {
        Self { active }
    }
}
