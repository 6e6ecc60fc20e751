//! Home page: hero, featured projects, skills, and experience.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. All content comes from the static collections
//! and the interface dictionary; there is nothing to fetch.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::experience_timeline::ExperienceTimeline;
use crate::components::project_card::ProjectCard;
use crate::components::skills_grid::SkillsGrid;
use crate::content::{experience, projects, skills};
use crate::i18n::{self, DEFAULT_LANGUAGE};

/// How many projects the landing page features before linking to the rest.
const FEATURED_PROJECT_COUNT: usize = 3;

/// Landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    let strings = &i18n::ui(DEFAULT_LANGUAGE).home;

    let featured = projects::projects()
        .into_iter()
        .take(FEATURED_PROJECT_COUNT)
        .map(|project| view! { <ProjectCard project=project /> })
        .collect_view();

    view! {
        <Title text=strings.page_title />
        <Meta name="description" content=strings.page_description />

        <section class="hero">
            <div class="hero__copy">
                <h1 class="hero__greeting">{strings.hero_greeting}</h1>
                <p class="hero__subtitle">
                    <span>{strings.hero_subtitle_part1}</span>
                    <span class="hero__subtitle-divider">"·"</span>
                    <span>{strings.hero_subtitle_part2}</span>
                </p>
                <p class="hero__introduction">{strings.hero_introduction}</p>
                <div class="hero__actions">
                    <a class="btn hero__connect" href="/about">
                        {strings.hero_view_work_button}
                    </a>
                    <a class="btn hero__resume" href="/assets/resume.pdf">
                        {strings.hero_contact_button}
                    </a>
                </div>
            </div>
            <img class="hero__portrait" src="/assets/profile.webp" alt=strings.hero_image_alt />
        </section>

        <section class="featured-projects">
            <h2 class="featured-projects__title">{strings.featured_projects_title}</h2>
            <p class="featured-projects__description">{strings.featured_projects_description}</p>
            <div class="featured-projects__grid">{featured}</div>
        </section>

        <section class="skills">
            <h2 class="skills__title">{strings.my_skills_title}</h2>
            <p class="skills__description">{strings.my_skills_description}</p>
            <SkillsGrid categories=skills::skills() />
        </section>

        <ExperienceTimeline entries=experience::experience() />
    }
}
