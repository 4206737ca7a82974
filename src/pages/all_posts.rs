//! All posts listing, with author names resolved from the users collection.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::net::api::{self, ApiError};
use crate::net::types::{Post, User};

/// Fetch posts and users together so cards can show author names.
async fn load_feed() -> Result<(Vec<Post>, Vec<User>), ApiError> {
    let posts = api::fetch_posts().await?;
    let users = api::fetch_users().await?;
    Ok((posts, users))
}

/// Every user's posts, newest first.
#[component]
pub fn AllPostsPage() -> impl IntoView {
    let feed = LocalResource::new(|| load_feed());

    view! {
        <div class="all-posts-page">
            <h2>"All Posts"</h2>
            <Suspense fallback=move || view! { <p>"Loading posts..."</p> }>
                {move || {
                    feed.get()
                        .map(|loaded| match loaded {
                            Err(_) => view! {
                                <p class="all-posts-page__error">
                                    "Could not load posts. Please try again later."
                                </p>
                            }
                                .into_any(),
                            Ok((mut posts, users)) => {
                                posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                                let names: HashMap<String, String> = users
                                    .into_iter()
                                    .map(|u| (u.id, u.fullname))
                                    .collect();
                                view! {
                                    <div class="all-posts-page__grid">
                                        {posts
                                            .into_iter()
                                            .map(|post| {
                                                let author = names.get(&post.created_by).cloned();
                                                view! { <PostCard post=post author=author/> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
