//! Site header with primary navigation and the theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by the app shell and persists across route swaps; the
//! active-link highlight follows the router location.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::theme_toggle::ThemeToggle;
use crate::i18n::{self, DEFAULT_LANGUAGE};

/// Top navigation bar.
#[component]
pub fn SiteHeader() -> impl IntoView {
    let pathname = use_location().pathname;
    let nav = &i18n::ui(DEFAULT_LANGUAGE).nav;

    // Copy-captured memo so every link's class closure can own a copy.
    let active = move |prefix: &'static str| {
        let path = pathname.get();
        if prefix == "/" { path == "/" } else { path.starts_with(prefix) }
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                "Shaheen"
            </a>
            <nav class="site-header__nav">
                <a
                    href="/"
                    class="site-header__link"
                    class:site-header__link--active=move || active("/")
                >
                    {nav.home}
                </a>
                <a
                    href="/projects"
                    class="site-header__link"
                    class:site-header__link--active=move || active("/projects")
                >
                    {nav.projects}
                </a>
                <a
                    href="/blog"
                    class="site-header__link"
                    class:site-header__link--active=move || active("/blog")
                >
                    {nav.blog}
                </a>
                <a
                    href="/about"
                    class="site-header__link"
                    class:site-header__link--active=move || active("/about")
                >
                    {nav.about}
                </a>
            </nav>
            <ThemeToggle />
        </header>
    }
}
