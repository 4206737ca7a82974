//! Home page: hero, recent posts feed, popular categories.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::net::api::{self, ApiError};
use crate::net::types::{Category, Post};
use crate::state::dashboard::posts_per_category;

async fn load_home() -> Result<(Vec<Post>, Vec<Category>), ApiError> {
    let posts = api::fetch_posts().await?;
    let categories = api::fetch_categories().await?;
    Ok((posts, categories))
}

/// Landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    let data = LocalResource::new(|| load_home());

    view! {
        <div class="home-page">
            <section class="hero">
                <h1 class="hero__title">"Write. Share. Discover."</h1>
                <p class="hero__subtitle">
                    "BlogScope is a home for your ideas: publish posts, follow \
                     categories, and join the conversation."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/register">
                        "Get started"
                    </a>
                    <a class="btn" href="/all-users-posts">
                        "Browse posts"
                    </a>
                </div>
            </section>

            <Suspense fallback=move || view! { <p>"Loading feed..."</p> }>
                {move || {
                    data.get()
                        .map(|loaded| match loaded {
                            Err(_) => view! {
                                <p class="home-page__error">
                                    "Could not load the feed. Please try again later."
                                </p>
                            }
                                .into_any(),
                            Ok((mut posts, categories)) => {
                                posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                                let recent: Vec<_> = posts.iter().take(3).cloned().collect();
                                let popular = posts_per_category(&categories, &posts);
                                view! {
                                    <section class="home-page__feed">
                                        <h2>"Latest from the feed"</h2>
                                        <div class="home-page__cards">
                                            {recent
                                                .into_iter()
                                                .map(|post| view! { <PostCard post=post/> })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    </section>

                                    <section class="home-page__categories">
                                        <h2>"Popular categories"</h2>
                                        <ul class="home-page__category-list">
                                            {popular
                                                .into_iter()
                                                .map(|(name, count)| {
                                                    view! {
                                                        <li>
                                                            <a href="/categories">
                                                                {format!("{name} ({count})")}
                                                            </a>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    </section>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
