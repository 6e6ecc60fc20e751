//! Skills section: categorized technology badges.

use leptos::prelude::*;

use crate::content::skills::SkillCategory;

/// Grid of skill categories, each with its technology badges.
#[component]
pub fn SkillsGrid(categories: Vec<SkillCategory>) -> impl IntoView {
    let cells = categories
        .into_iter()
        .map(|category| {
            let icon_class = format!("skills-category__icon skills-category__icon--{}", category.icon_name);
            let badges = category
                .technologies
                .into_iter()
                .map(|tech| view! { <li class="skills-category__badge">{tech.name}</li> })
                .collect_view();

            view! {
                <div class="skills-category" id=category.id>
                    <span class=icon_class aria-hidden="true"></span>
                    <ul class="skills-category__badges">{badges}</ul>
                </div>
            }
        })
        .collect_view();

    view! { <div class="skills-grid">{cells}</div> }
}
