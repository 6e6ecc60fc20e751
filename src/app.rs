//! Application shell: routes, shared state, and theme bootstrap.
//!
//! ARCHITECTURE
//! ============
//! The shell provides the theme state context, runs the theme controller's
//! init protocol once after hydration, and reapplies the theme around route
//! swaps so replaced toggle controls pick their pressed state back up.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::i18n::{self, DEFAULT_LANGUAGE};
use crate::pages::about::AboutPage;
use crate::pages::blog::BlogPage;
use crate::pages::blog_post::BlogPostPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::project_detail::ProjectDetailPage;
use crate::pages::projects::ProjectsPage;
use crate::state::theme::ThemeState;
use crate::util::browser_theme;

/// Root component mounted by the hydrate entry point.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeState::default());
    provide_context(theme);

    // Init protocol: first apply happens inside install(), synchronously,
    // before any listener attaches. Effects never run during SSR, and this
    // one has no reactive dependencies, so it fires exactly once per page
    // session.
    Effect::new(move || {
        browser_theme::install(move |active| {
            theme.update(|state| state.active = active);
        });
    });

    let site = &i18n::ui(DEFAULT_LANGUAGE).site;

    view! {
        // Site-wide defaults; pages override the title and description.
        <Title text=site.title />
        <Meta name="description" content=site.description />

        <Router>
            <ThemeSwapBridge />
            <SiteHeader />
            <main class="site-main">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/projects") view=ProjectsPage />
                    <Route path=path!("/projects/:id") view=ProjectDetailPage />
                    <Route path=path!("/blog") view=BlogPage />
                    <Route path=path!("/blog/:id") view=BlogPostPage />
                </Routes>
            </main>
            <SiteFooter />
        </Router>
    }
}

/// Reapplies the theme around router navigations.
///
/// The router has no pre-navigation hook, so the swap effect runs when the
/// pathname changes: one reapply as the new content lands and one on the
/// next frame to sweep toggle controls the swap replaced. Both paths are
/// idempotent and never persist.
#[component]
fn ThemeSwapBridge() -> impl IntoView {
    let location = leptos_router::hooks::use_location();

    Effect::new(move || {
        let _path = location.pathname.get();
        browser_theme::reapply_before_swap();
        request_animation_frame(browser_theme::reapply_after_swap);
    });
}
