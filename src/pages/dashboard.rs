//! Dashboard: collection stats and simple chart views.
//!
//! Fetches the four collections and reduces them with the pure helpers in
//! [`crate::state::dashboard`]. Charts are plain markup (scaled bars and
//! lists), so the numbers stay testable away from any canvas library.

use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::net::types::{Category, CommentRecord, Post, User};
use crate::state::auth::AuthState;
use crate::state::dashboard::{likes_per_post, max_count, posts_over_time, posts_per_category};

#[derive(Clone)]
struct Collections {
    posts: Vec<Post>,
    users: Vec<User>,
    comments: Vec<CommentRecord>,
    categories: Vec<Category>,
}

async fn load_collections() -> Result<Collections, ApiError> {
    Ok(Collections {
        posts: api::fetch_posts().await?,
        users: api::fetch_users().await?,
        comments: api::fetch_comments().await?,
        categories: api::fetch_categories().await?,
    })
}

/// Horizontal bar chart over (label, count) pairs.
#[component]
fn BarChart(title: &'static str, series: Vec<(String, usize)>) -> impl IntoView {
    let max = max_count(&series);

    view! {
        <div class="chart-card">
            <h3 class="chart-card__title">{title}</h3>
            <ul class="chart-card__bars">
                {series
                    .into_iter()
                    .map(|(label, count)| {
                        let pct = count * 100 / max;
                        view! {
                            <li class="chart-card__row">
                                <span class="chart-card__label">{label}</span>
                                <span
                                    class="chart-card__bar"
                                    style:width=format!("{pct}%")
                                ></span>
                                <span class="chart-card__count">{count}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

/// Admin dashboard with stats and charts. Rendered behind the route guard.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let data = LocalResource::new(|| load_collections());

    let greeting = move || {
        auth.get()
            .user
            .map(|u| format!("Welcome back, {}", u.fullname))
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h2>"Dashboard"</h2>
                <p class="dashboard-page__greeting">{greeting}</p>
            </header>

            <Suspense fallback=move || view! { <p>"Loading dashboard..."</p> }>
                {move || {
                    data.get()
                        .map(|loaded| match loaded {
                            Err(_) => view! {
                                <p class="dashboard-page__error">
                                    "Could not load dashboard data. Please try again later."
                                </p>
                            }
                                .into_any(),
                            Ok(c) => {
                                let by_category = posts_per_category(&c.categories, &c.posts);
                                let over_time = posts_over_time(&c.posts);
                                let likes = likes_per_post(&c.posts);
                                view! {
                                    <div class="dashboard-page__stats">
                                        <div class="stat-card">
                                            <span class="stat-card__value">{c.posts.len()}</span>
                                            <span class="stat-card__label">"Posts"</span>
                                        </div>
                                        <div class="stat-card">
                                            <span class="stat-card__value">{c.users.len()}</span>
                                            <span class="stat-card__label">"Users"</span>
                                        </div>
                                        <div class="stat-card">
                                            <span class="stat-card__value">{c.comments.len()}</span>
                                            <span class="stat-card__label">"Comments"</span>
                                        </div>
                                        <div class="stat-card">
                                            <span class="stat-card__value">{c.categories.len()}</span>
                                            <span class="stat-card__label">"Categories"</span>
                                        </div>
                                    </div>

                                    <div class="dashboard-page__charts">
                                        <BarChart title="Posts per category" series=by_category/>
                                        <BarChart title="Posts over time" series=over_time/>
                                        <BarChart title="Likes per post" series=likes/>
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
