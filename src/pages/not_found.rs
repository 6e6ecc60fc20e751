//! Fallback page for unmatched routes.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::i18n::{self, DEFAULT_LANGUAGE};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let strings = &i18n::ui(DEFAULT_LANGUAGE).not_found;

    view! {
        <Title text=strings.page_title />

        <section class="not-found">
            <h1 class="not-found__title">{strings.title}</h1>
            <p class="not-found__message">{strings.message}</p>
            <a class="btn not-found__home" href="/">
                {strings.home_link}
            </a>
        </section>
    }
}
