//! Blog list page with free-text search and tag filtering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filtering runs client-side over the embedded collection; the filter
//! logic itself lives in `content::blog` and only the signal wiring is
//! here.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::content::blog::{self, BlogPost};
use crate::i18n::{self, DEFAULT_LANGUAGE};

/// Clicking the already-selected tag clears the filter; clicking another
/// selects it.
fn toggle_tag(selected: Option<&str>, clicked: &str) -> Option<String> {
    if selected == Some(clicked) { None } else { Some(clicked.to_owned()) }
}

#[component]
pub fn BlogPage() -> impl IntoView {
    let strings = &i18n::ui(DEFAULT_LANGUAGE).blog_page;

    let posts = blog::posts();
    if posts.is_empty() {
        empty_state_page(strings)
    } else {
        populated_page(strings, posts)
    }
}

/// Placeholder shown while the collection has no posts.
fn empty_state_page(strings: &'static crate::i18n::ui::BlogPageStrings) -> AnyView {
    view! {
        <Title text=strings.page_title />
        <section class="blog-page">
            <h1 class="blog-page__title">{strings.title}</h1>
            <p class="blog-page__coming-soon">{strings.coming_soon}</p>
        </section>
    }
    .into_any()
}

/// Search, tag filter, and the post list.
fn populated_page(
    strings: &'static crate::i18n::ui::BlogPageStrings,
    posts: Vec<BlogPost>,
) -> AnyView {
    let query = RwSignal::new(String::new());
    let selected_tag = RwSignal::new(None::<String>);

    let tag_buttons = blog::all_tags(&posts)
        .into_iter()
        .map(|tag| {
            let label = tag.clone();
            let this_tag = tag.clone();
            let active_tag = tag;
            view! {
                <button
                    class="tag blog-page__tag"
                    class:blog-page__tag--active=move || {
                        selected_tag.get().as_deref() == Some(active_tag.as_str())
                    }
                    on:click=move |_| {
                        selected_tag
                            .update(|current| {
                                *current = toggle_tag(current.as_deref(), &this_tag);
                            });
                    }
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    let list = move || {
        let visible = blog::filter_posts(&posts, &query.get(), selected_tag.get().as_deref());
        if visible.is_empty() {
            return view! { <p class="blog-page__empty">{strings.no_posts_found}</p> }.into_any();
        }
        visible
            .into_iter()
            .map(|post| post_card(strings, &post))
            .collect_view()
            .into_any()
    };

    view! {
        <Title text=strings.page_title />
        <Meta name="description" content=strings.page_description />

        <section class="blog-page">
            <h1 class="blog-page__title">{strings.title}</h1>
            <p class="blog-page__description">{strings.description}</p>

            <input
                class="blog-page__search"
                type="search"
                placeholder=strings.search_placeholder
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />

            <div class="blog-page__tags">
                <button
                    class="tag blog-page__tag"
                    class:blog-page__tag--active=move || selected_tag.get().is_none()
                    on:click=move |_| selected_tag.set(None)
                >
                    {strings.all_tags_label}
                </button>
                {tag_buttons}
            </div>

            <div class="blog-page__list">{list}</div>
        </section>
    }
    .into_any()
}

/// One post summary card in the list.
fn post_card(strings: &'static crate::i18n::ui::BlogPageStrings, post: &BlogPost) -> impl IntoView + use<> {
    let href = format!("/blog/{}", post.id);
    let minutes = blog::reading_time_minutes(&post.body);
    let tags = post
        .tags
        .iter()
        .map(|tag| {
            let tag = tag.clone();
            view! { <span class="tag blog-card__tag">{tag}</span> }
        })
        .collect_view();

    view! {
        <article class="blog-card">
            <h2 class="blog-card__title">
                <a href=href.clone()>{post.title.clone()}</a>
            </h2>
            <p class="blog-card__meta">
                <span>{strings.published_on}{post.published_on.clone()}</span>
                <span class="blog-card__read-time">
                    {format!("{minutes} {}", strings.reading_time_suffix)}
                </span>
            </p>
            <p class="blog-card__description">{post.description.clone()}</p>
            <div class="blog-card__tags">{tags}</div>
            <a class="blog-card__more" href=href>
                {strings.read_more}
            </a>
        </article>
    }
}
