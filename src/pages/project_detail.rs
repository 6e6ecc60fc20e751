//! Project detail page for the `/projects/:id` route.

#[cfg(test)]
#[path = "project_detail_test.rs"]
mod project_detail_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::content::projects::{self, Project};
use crate::i18n::{self, DEFAULT_LANGUAGE};

/// Resolve the routed project from the raw `:id` param.
fn routed_project(id: Option<&str>) -> Option<Project> {
    projects::project_by_id(id?.trim())
}

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let strings = &i18n::ui(DEFAULT_LANGUAGE).project_detail;
    let not_found = &i18n::ui(DEFAULT_LANGUAGE).not_found;
    let params = use_params_map();

    move || {
        let project = params.with(|p| routed_project(p.get("id").as_deref()));
        let Some(project) = project else {
            return view! {
                <section class="project-detail project-detail--missing">
                    <Title text=not_found.page_title />
                    <p>{not_found.message}</p>
                    <a class="btn" href="/projects">{strings.back_to_projects}</a>
                </section>
            }
            .into_any();
        };

        let about = project
            .detailed_description
            .map(|body| {
                view! {
                    <h2 class="project-detail__section-title">{strings.about_title}</h2>
                    <p class="project-detail__about">{body}</p>
                }
            });
        let features = (!project.key_features.is_empty()).then(|| {
            let items = project
                .key_features
                .into_iter()
                .map(|feature| {
                    view! {
                        <li class="project-detail__feature">
                            <h3 class="project-detail__feature-title">{feature.title}</h3>
                            <p class="project-detail__feature-description">{feature.description}</p>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <h2 class="project-detail__section-title">{strings.key_features_title}</h2>
                <ul class="project-detail__features">{items}</ul>
            }
        });
        let challenges = project.challenges.map(|body| {
            view! {
                <h2 class="project-detail__section-title">{strings.challenges_title}</h2>
                <p class="project-detail__challenges">{body}</p>
            }
        });
        let learnings = project.learnings.map(|body| {
            view! {
                <h2 class="project-detail__section-title">{strings.learnings_title}</h2>
                <p class="project-detail__learnings">{body}</p>
            }
        });
        let visit = project.project_url.map(|url| {
            view! {
                <a class="btn project-detail__visit" href=url target="_blank" rel="noopener">
                    {strings.visit_project_button}
                </a>
            }
        });
        let code = project.repo_url.map(|url| {
            view! {
                <a class="btn project-detail__code" href=url target="_blank" rel="noopener">
                    {strings.view_code_button}
                </a>
            }
        });
        let image = project.image.map(|asset| {
            let alt = project.image_alt.clone().unwrap_or_default();
            view! { <img class="project-detail__image" src=asset.src alt=alt /> }
        });

        view! {
            <section class="project-detail">
                <Title text=project.title.clone() />
                <a class="project-detail__back" href="/projects">
                    {strings.back_to_projects}
                </a>
                <h1 class="project-detail__title">{project.title}</h1>
                <p class="project-detail__meta">
                    <span class="project-detail__label">{strings.category_label}</span>
                    <span class="project-detail__category">{project.category}</span>
                    <span class="project-detail__label">{strings.date_label}</span>
                    <span class="project-detail__date">{project.date}</span>
                </p>
                {image}
                <p class="project-detail__description">{project.description}</p>
                {about}
                {features}
                {challenges}
                {learnings}
                <div class="project-detail__actions">{visit} {code}</div>
            </section>
        }
        .into_any()
    }
}
