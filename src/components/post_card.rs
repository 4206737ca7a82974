//! Card component for post listings.

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

use leptos::prelude::*;

use crate::net::types::Post;

/// Strip HTML tags from rich-text content for a plain-text snippet,
/// truncated to `max_len` characters with an ellipsis.
pub fn snippet(content: &str, max_len: usize) -> String {
    let mut out = String::with_capacity(content.len().min(max_len));
    let mut in_tag = false;
    let mut count = 0;
    for ch in content.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => {
                if count == max_len {
                    out.push('\u{2026}');
                    return out;
                }
                out.push(ch);
                count += 1;
            }
            _ => {}
        }
    }
    out
}

/// A clickable card for one post in a listing.
#[component]
pub fn PostCard(
    post: Post,
    /// Author display name, when the caller has resolved it.
    #[prop(optional_no_strip)]
    author: Option<String>,
) -> impl IntoView {
    let href = format!("/all-users-posts/{}", post.id);
    let preview = snippet(&post.content, 120);
    let like_count = post.likes.len();
    let comment_count = post.comments.len();

    view! {
        <a class="post-card" href=href>
            <span class="post-card__category">{post.category}</span>
            <h3 class="post-card__title">{post.title}</h3>
            <p class="post-card__snippet">{preview}</p>
            <div class="post-card__meta">
                {author.map(|name| view! { <span class="post-card__author">{name}</span> })}
                <span class="post-card__likes">{format!("\u{2665} {like_count}")}</span>
                <span class="post-card__comments">{format!("\u{1f4ac} {comment_count}")}</span>
            </div>
        </a>
    }
}
