//! The signed-in user's own posts.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::net::api;
use crate::state::auth::AuthState;

/// Posts created by the current identity, newest first.
#[component]
pub fn MyPostsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let posts = LocalResource::new(|| api::fetch_posts());

    let my_id = move || auth.get().user.map(|u| u.id).unwrap_or_default();

    view! {
        <div class="my-posts-page">
            <header class="my-posts-page__header">
                <h2>"My Posts"</h2>
                <a class="btn btn--primary" href="/create-posts">
                    "+ New Post"
                </a>
            </header>
            <Suspense fallback=move || view! { <p>"Loading posts..."</p> }>
                {move || {
                    posts
                        .get()
                        .map(|loaded| match loaded {
                            Err(_) => view! {
                                <p class="my-posts-page__error">
                                    "Could not load posts. Please try again later."
                                </p>
                            }
                                .into_any(),
                            Ok(list) => {
                                let me = my_id();
                                let mut mine: Vec<_> = list
                                    .into_iter()
                                    .filter(|p| p.created_by == me)
                                    .collect();
                                mine.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                                if mine.is_empty() {
                                    view! {
                                        <p class="my-posts-page__empty">
                                            "You have not written anything yet."
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <div class="my-posts-page__grid">
                                            {mine
                                                .into_iter()
                                                .map(|post| view! { <PostCard post=post/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
