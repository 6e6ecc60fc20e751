//! Blog collection: posts, markdown rendering, and list filtering.
//!
//! DESIGN
//! ======
//! Post bodies are Markdown strings in the collection; rendering happens
//! per page view with raw HTML stripped, so the collection can never inject
//! markup into the page shell. Filtering and related-post selection are
//! pure functions over the post list.

#[cfg(test)]
#[path = "blog_test.rs"]
mod blog_test;

use pulldown_cmark::{Event, Options, Parser, html};
use serde::Deserialize;

const BLOG_JSON: &str = include_str!("../../collections/blog.json");

/// Approximate reading speed used for the "min read" badge.
const WORDS_PER_MINUTE: usize = 200;

#[derive(Debug, Default, Deserialize)]
struct BlogFile {
    #[serde(default)]
    posts: Vec<BlogPost>,
}

/// One blog post as stored and rendered.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub description: String,
    /// ISO date (`YYYY-MM-DD`).
    pub published_on: String,
    #[serde(default)]
    pub updated_on: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Markdown body.
    pub body: String,
}

/// All posts, newest first.
#[must_use]
pub fn posts() -> Vec<BlogPost> {
    posts_from_json(BLOG_JSON)
}

/// Lookup for the `/blog/:id` route.
#[must_use]
pub fn post_by_id(id: &str) -> Option<BlogPost> {
    posts().into_iter().find(|post| post.id == id)
}

fn posts_from_json(raw: &str) -> Vec<BlogPost> {
    let file: BlogFile = serde_json::from_str(raw).unwrap_or_default();
    let mut posts = file.posts;
    // ISO dates order lexicographically.
    posts.sort_by(|a, b| b.published_on.cmp(&a.published_on));
    posts
}

/// Render a post body to HTML. Raw inline/block HTML in the Markdown is
/// dropped before rendering.
#[must_use]
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Estimated reading time in minutes, never less than one.
#[must_use]
pub fn reading_time_minutes(markdown: &str) -> usize {
    let words = markdown.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

/// Case-insensitive free-text + tag filter for the blog list. An empty
/// query and no tag select everything.
#[must_use]
pub fn filter_posts(posts: &[BlogPost], query: &str, tag: Option<&str>) -> Vec<BlogPost> {
    let needle = query.trim().to_lowercase();
    posts
        .iter()
        .filter(|post| {
            needle.is_empty()
                || post.title.to_lowercase().contains(&needle)
                || post.description.to_lowercase().contains(&needle)
        })
        .filter(|post| tag.is_none_or(|t| post.tags.iter().any(|candidate| candidate == t)))
        .cloned()
        .collect()
}

/// Every tag used by any post, sorted and deduplicated.
#[must_use]
pub fn all_tags(posts: &[BlogPost]) -> Vec<String> {
    let mut tags: Vec<String> = posts.iter().flat_map(|post| post.tags.clone()).collect();
    tags.sort();
    tags.dedup();
    tags
}

/// Up to `limit` other posts sharing a tag with `current`, newest first.
#[must_use]
pub fn related_posts(posts: &[BlogPost], current: &BlogPost, limit: usize) -> Vec<BlogPost> {
    posts
        .iter()
        .filter(|post| post.id != current.id)
        .filter(|post| post.tags.iter().any(|tag| current.tags.contains(tag)))
        .take(limit)
        .cloned()
        .collect()
}
