//! Blog post page for the `/blog/:id` route.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::content::blog;
use crate::i18n::{self, DEFAULT_LANGUAGE};

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let strings = &i18n::ui(DEFAULT_LANGUAGE).blog_post;
    let not_found = &i18n::ui(DEFAULT_LANGUAGE).not_found;
    let params = use_params_map();

    move || {
        let post = params.with(|p| p.get("id").and_then(|id| blog::post_by_id(id.trim())));
        let Some(post) = post else {
            return view! {
                <section class="blog-post blog-post--missing">
                    <Title text=not_found.page_title />
                    <p>{not_found.message}</p>
                    <a class="btn" href="/blog">{strings.back_to_list}</a>
                </section>
            }
            .into_any();
        };

        let minutes = blog::reading_time_minutes(&post.body);
        let rendered = blog::render_markdown_html(&post.body);
        let updated = post.updated_on.clone().map(|date| {
            view! { <span class="blog-post__updated">{strings.updated_on}{date}</span> }
        });

        let related = blog::related_posts(&blog::posts(), &post, 3);
        let related_section = (!related.is_empty()).then(|| {
            let cards = related
                .into_iter()
                .map(|other| {
                    let href = format!("/blog/{}", other.id);
                    view! {
                        <li class="blog-post__related-item">
                            <a href=href>{other.title}</a>
                            <span class="blog-post__related-more">{strings.read_more}</span>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <aside class="blog-post__related">
                    <h2 class="blog-post__related-title">{strings.related_posts_title}</h2>
                    <ul>{cards}</ul>
                </aside>
            }
        });

        view! {
            <article class="blog-post">
                <Title text=post.title.clone() />
                <a class="blog-post__back" href="/blog">
                    {strings.back_to_list}
                </a>
                <h1 class="blog-post__title">{post.title}</h1>
                <p class="blog-post__meta">
                    <span>{strings.published_on}{post.published_on}</span>
                    {updated}
                    <span class="blog-post__read-time">
                        {format!("{minutes} {}", strings.reading_time_suffix)}
                    </span>
                </p>
                <div class="blog-post__body" inner_html=rendered></div>
                {related_section}
            </article>
        }
        .into_any()
    }
}
