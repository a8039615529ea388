//! Plain-text renderings of posts and categories.

use std::fmt::Write;

use inkpost_shared::dto::{CategoryResponse, PostResponse};

/// Number of content characters shown on a list card.
pub const EXCERPT_CHARS: usize = 150;

pub const EMPTY_LIST: &str = "No posts found. Why not create one?";

pub fn category_label(post: &PostResponse) -> &str {
    post.category
        .as_ref()
        .map(|c| c.name.as_str())
        .unwrap_or("Uncategorized")
}

/// The first `EXCERPT_CHARS` characters of `content`, followed by "...".
pub fn excerpt(content: &str) -> String {
    let mut out: String = content.chars().take(EXCERPT_CHARS).collect();
    out.push_str("...");
    out
}

pub fn render_post_card(post: &PostResponse) -> String {
    format!(
        "{}\n  id: {}\n  Category: {}\n  {}\n",
        post.title,
        post.id,
        category_label(post),
        excerpt(&post.content)
    )
}

pub fn render_post_list(posts: &[PostResponse]) -> String {
    if posts.is_empty() {
        return format!("{EMPTY_LIST}\n");
    }

    let mut out = String::new();
    for post in posts {
        out.push_str(&render_post_card(post));
        out.push('\n');
    }
    out
}

pub fn render_post_detail(post: &PostResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", post.title);
    let _ = writeln!(out, "Category: {}", category_label(post));
    if let Some(image) = &post.featured_image {
        let _ = writeln!(out, "Image: {image}");
    }
    let _ = writeln!(out, "Created: {}", post.created_at.to_rfc3339());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", post.content);
    out
}

pub fn render_categories(categories: &[CategoryResponse]) -> String {
    let mut out = String::new();
    for category in categories {
        let _ = writeln!(out, "{}  {}", category.id, category.name);
    }
    out
}
