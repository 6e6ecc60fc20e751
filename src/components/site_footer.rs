//! Site footer.

use leptos::prelude::*;

use crate::i18n::{self, DEFAULT_LANGUAGE};

/// Bottom-of-page footer shared by every route.
#[component]
pub fn SiteFooter() -> impl IntoView {
    let footer = &i18n::ui(DEFAULT_LANGUAGE).footer;

    view! {
        <footer class="site-footer">
            <span class="site-footer__name">"Shaheen Nayyar"</span>
            <span class="site-footer__rights">{footer.rights}</span>
        </footer>
    }
}
