//! Theme toggle button for the site header.
//!
//! DESIGN
//! ======
//! The button only *marks* itself as a toggle control via
//! `data-theme-toggle`; the actual flip is handled by the controller's
//! capturing click listener, and `aria-pressed` is owned by the
//! controller's DOM sweep so every toggle on the page stays consistent.
//! Only the icon is reactive here.

use leptos::prelude::*;

use crate::i18n::{self, DEFAULT_LANGUAGE};
use crate::state::theme::ThemeState;

/// Icon button flipping between light and dark.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let label = i18n::ui(DEFAULT_LANGUAGE).nav.toggle_theme;

    view! {
        <button
            class="theme-toggle"
            data-theme-toggle=""
            title=label
            aria-label=label
        >
            {move || if theme.get().active.is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
