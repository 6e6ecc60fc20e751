//! About page.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::i18n::{self, DEFAULT_LANGUAGE};

#[component]
pub fn AboutPage() -> impl IntoView {
    let strings = &i18n::ui(DEFAULT_LANGUAGE).about;

    view! {
        <Title text=strings.page_title />
        <Meta name="description" content=strings.page_description />

        <section class="about">
            <h1 class="about__title">{strings.title}</h1>
            <p class="about__description">{strings.description}</p>

            <h2 class="about__what-title">{strings.what_we_do_title}</h2>
            <p class="about__what-body">{strings.what_we_do_body}</p>
        </section>
    }
}
