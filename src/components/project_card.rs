//! Reusable card for project list items.
//!
//! DESIGN
//! ======
//! Keeps project presentation consistent between the home page's featured
//! strip and the full projects page.

use leptos::prelude::*;

use crate::content::projects::Project;
use crate::i18n::{self, DEFAULT_LANGUAGE};

/// A clickable card representing one project.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let strings = &i18n::ui(DEFAULT_LANGUAGE).home;
    let href = format!("/projects/{}", project.id);
    let media_href = href.clone();
    let alt = project.image_alt.clone().unwrap_or_else(|| project.title.clone());

    let media = match project.image {
        Some(image) => view! {
            <img class="project-card__image" src=image.src alt=alt />
        }
        .into_any(),
        None => view! {
            <span class="project-card__placeholder">{strings.image_not_available}</span>
        }
        .into_any(),
    };

    let repo_link = project.repo_url.map(|url| {
        view! {
            <a class="btn project-card__code" href=url target="_blank" rel="noopener">
                {strings.project_card_view_code}
            </a>
        }
    });

    view! {
        <article class="project-card">
            <a class="project-card__media" href=media_href>
                {media}
            </a>
            <div class="project-card__body">
                <span class="project-card__category">{project.category}</span>
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__description">{project.description}</p>
                <div class="project-card__actions">
                    <a class="btn project-card__view" href=href>
                        {strings.project_card_view_project}
                    </a>
                    {repo_link}
                </div>
            </div>
        </article>
    }
}
