//! Experience timeline section for the home page.

use leptos::prelude::*;

use crate::content::experience::ExperienceEntry;
use crate::i18n::{self, DEFAULT_LANGUAGE};

/// Ordered list of positions with dates, highlights, and tags.
#[component]
pub fn ExperienceTimeline(entries: Vec<ExperienceEntry>) -> impl IntoView {
    let strings = &i18n::ui(DEFAULT_LANGUAGE).home;

    let items = entries
        .into_iter()
        .map(|entry| {
            let end = entry
                .end_date
                .unwrap_or_else(|| strings.experience_present.to_owned());
            let dates = format!("{} – {}", entry.start_date, end);
            let logo = entry.logo.map(|asset| {
                view! {
                    <img class="experience-entry__logo" src=asset.src alt="" aria-hidden="true" />
                }
            });
            let location = entry.location.map(|location| {
                view! { <span class="experience-entry__location">{location}</span> }
            });
            let summary = entry
                .summary
                .map(|summary| view! { <p class="experience-entry__summary">{summary}</p> });
            let highlights = entry
                .highlights
                .into_iter()
                .map(|highlight| view! { <li class="experience-entry__highlight">{highlight}</li> })
                .collect_view();
            let tags = entry
                .tags
                .into_iter()
                .map(|tag| view! { <span class="tag experience-entry__tag">{tag}</span> })
                .collect_view();

            view! {
                <li class="experience-entry">
                    {logo}
                    <div class="experience-entry__body">
                        <h3 class="experience-entry__role">{entry.role}</h3>
                        <span class="experience-entry__company">{entry.company}</span>
                        {location}
                        <span class="experience-entry__dates">{dates}</span>
                        {summary}
                        <ul class="experience-entry__highlights">{highlights}</ul>
                        <div class="experience-entry__tags">{tags}</div>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="experience">
            <h2 class="experience__title">{strings.experience_title}</h2>
            <ul class="experience__list">{items}</ul>
        </section>
    }
}
