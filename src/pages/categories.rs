//! Categories page: browse posts filtered by category.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::net::api::{self, ApiError};
use crate::net::types::{Category, Post};

async fn load_catalog() -> Result<(Vec<Category>, Vec<Post>), ApiError> {
    let categories = api::fetch_categories().await?;
    let posts = api::fetch_posts().await?;
    Ok((categories, posts))
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "categories-page__tab categories-page__tab--active"
    } else {
        "categories-page__tab"
    }
}

/// Category browser with a client-side filter.
#[component]
pub fn CategoriesPage() -> impl IntoView {
    let data = LocalResource::new(|| load_catalog());
    let selected = RwSignal::new(None::<String>);

    view! {
        <div class="categories-page">
            <h2>"Categories"</h2>
            <Suspense fallback=move || view! { <p>"Loading categories..."</p> }>
                {move || {
                    data.get()
                        .map(|loaded| match loaded {
                            Err(_) => view! {
                                <p class="categories-page__error">
                                    "Could not load categories. Please try again later."
                                </p>
                            }
                                .into_any(),
                            Ok((categories, posts)) => {
                                let filtered = move || {
                                    let pick = selected.get();
                                    posts
                                        .iter()
                                        .filter(|p| {
                                            pick.as_ref().is_none_or(|c| &p.category == c)
                                        })
                                        .cloned()
                                        .collect::<Vec<_>>()
                                };
                                view! {
                                    <nav class="categories-page__tabs">
                                        <button
                                            class=move || tab_class(selected.get().is_none())
                                            on:click=move |_| selected.set(None)
                                        >
                                            "All"
                                        </button>
                                        {categories
                                            .iter()
                                            .map(|c| {
                                                let name = c.name.clone();
                                                let label = c.name.clone();
                                                let is_active = {
                                                    let name = name.clone();
                                                    move || selected.get().as_deref() == Some(name.as_str())
                                                };
                                                view! {
                                                    <button
                                                        class=move || tab_class(is_active())
                                                        on:click=move |_| {
                                                            selected.set(Some(name.clone()));
                                                        }
                                                    >
                                                        {label}
                                                    </button>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </nav>

                                    <div class="categories-page__grid">
                                        {move || {
                                            filtered()
                                                .into_iter()
                                                .map(|post| view! { <PostCard post=post/> })
                                                .collect::<Vec<_>>()
                                        }}
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
