//! Projects list page.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::project_card::ProjectCard;
use crate::content::projects;
use crate::i18n::{self, DEFAULT_LANGUAGE};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let strings = &i18n::ui(DEFAULT_LANGUAGE).projects_page;

    let all = projects::projects();
    // The collection is static, so the empty state is decided at render time.
    let body = if all.is_empty() {
        view! {
            <div class="projects-page__empty">
                <p>{strings.no_projects}</p>
                <p class="projects-page__empty-detail">{strings.no_projects_description}</p>
            </div>
        }
        .into_any()
    } else {
        let cards = all
            .into_iter()
            .map(|project| view! { <ProjectCard project=project /> })
            .collect_view();
        view! { <div class="projects-page__grid">{cards}</div> }.into_any()
    };

    view! {
        <Title text=strings.meta_title />
        <Meta name="description" content=strings.meta_description />

        <section class="projects-page">
            <h1 class="projects-page__title">{strings.title}</h1>
            {body}
        </section>
    }
}
