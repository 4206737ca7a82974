//! Single post page: content, author, likes, comments.
//!
//! The action surface is driven by the permission resolver: a control the
//! current role lacks is not rendered at all. The backend enforces
//! nothing, so the gating is advisory. Like and comment mutations are
//! read-modify-patch, so two clients racing on the same post can lose
//! one append.

#[cfg(test)]
#[path = "single_post_test.rs"]
mod single_post_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api::{self, ApiError};
use crate::net::types::{Post, User};
use crate::permissions;
use crate::state::auth::AuthState;

/// Fetch a post and, best-effort, its author.
async fn load_detail(id: String) -> Result<(Post, Option<User>), ApiError> {
    let post = api::fetch_post(&id).await?;
    let author = api::fetch_user(&post.created_by).await.ok();
    Ok((post, author))
}

/// Likes list with this user's like appended.
pub fn with_like(mut likes: Vec<String>, user_id: &str) -> Vec<String> {
    likes.push(user_id.to_owned());
    likes
}

/// Comments list with a new comment appended, or `None` for blank input.
pub fn with_comment(mut comments: Vec<String>, text: &str) -> Option<Vec<String>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    comments.push(text.to_owned());
    Some(comments)
}

/// Post detail view with role-gated like/comment/edit/delete actions.
#[component]
pub fn SinglePostPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();

    let post_id = move || params.read().get("postId").unwrap_or_default();
    let detail = LocalResource::new(move || load_detail(post_id()));

    let new_comment = RwSignal::new(String::new());
    let action_error = RwSignal::new(None::<String>);

    let can = move || {
        let state = auth.get();
        permissions::resolve(state.user.as_ref().map(|u| u.role.as_str()))
    };

    let on_like = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::PostPatch;

            let Some(Ok((post, _))) = detail.get_untracked() else {
                return;
            };
            let Some(user) = auth.get_untracked().user else {
                return;
            };
            let likes = with_like(post.likes.clone(), &user.id);
            let id = post.id.clone();
            let detail = detail.clone();
            leptos::task::spawn_local(async move {
                let patch = PostPatch {
                    likes: Some(likes),
                    ..PostPatch::default()
                };
                match api::patch_post(&id, &patch).await {
                    Ok(_) => detail.refetch(),
                    Err(e) => action_error.set(Some(format!("Could not save like: {e}"))),
                }
            });
        }
    };

    let on_comment = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::PostPatch;

            let text = new_comment.get_untracked();
            let Some(Ok((post, _))) = detail.get_untracked() else {
                return;
            };
            let Some(comments) = with_comment(post.comments.clone(), &text) else {
                return;
            };
            let id = post.id.clone();
            let detail = detail.clone();
            leptos::task::spawn_local(async move {
                let patch = PostPatch {
                    comments: Some(comments),
                    ..PostPatch::default()
                };
                match api::patch_post(&id, &patch).await {
                    Ok(_) => {
                        new_comment.set(String::new());
                        detail.refetch();
                    }
                    Err(e) => action_error.set(Some(format!("Could not save comment: {e}"))),
                }
            });
        }
    };

    let on_delete = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| {
                    w.confirm_with_message("Are you sure you want to delete this post?")
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let id = post_id();
            leptos::task::spawn_local(async move {
                match api::delete_post(&id).await {
                    Ok(()) => {
                        // Full navigation for a clean state after deletion.
                        if let Some(w) = web_sys::window() {
                            let _ = w.location().set_href("/dashboard");
                        }
                    }
                    Err(e) => action_error.set(Some(format!("Could not delete post: {e}"))),
                }
            });
        }
    };

    view! {
        <div class="single-post-page">
            <Suspense fallback=move || view! { <p>"Loading..."</p> }>
                {move || {
                    detail
                        .get()
                        .map(|loaded| match loaded {
                            Err(_) => view! { <p class="single-post-page__error">"Error loading post."</p> }
                                .into_any(),
                            Ok((post, author)) => {
                                let like_count = post.likes.len();
                                let comments = post.comments.clone();
                                let author_name = author
                                    .map(|a| a.fullname)
                                    .unwrap_or_else(|| "Unknown author".to_owned());
                                view! {
                                    <article class="single-post">
                                        <Show when=move || {
                                            let c = can();
                                            c.can_update || c.can_delete
                                        }>
                                            <div class="single-post__actions">
                                                <Show when=move || can().can_update>
                                                    <a
                                                        class="btn"
                                                        title="Edit"
                                                        href=move || format!("/edit-post/{}", post_id())
                                                    >
                                                        "Edit"
                                                    </a>
                                                </Show>
                                                <Show when=move || can().can_delete>
                                                    <button
                                                        class="btn btn--danger"
                                                        title="Delete"
                                                        on:click=on_delete
                                                    >
                                                        "Delete"
                                                    </button>
                                                </Show>
                                            </div>
                                        </Show>

                                        <h2 class="single-post__title">{post.title.clone()}</h2>
                                        <div class="single-post__meta">
                                            <span>{author_name}</span>
                                            <span>{post.category.clone()}</span>
                                            <span>{post.created_at.clone()}</span>
                                        </div>
                                        <div class="single-post__content" inner_html=post.content.clone()></div>

                                        <Show when=move || can().can_like>
                                            <button class="single-post__like" on:click=on_like>
                                                {format!("\u{2665} {like_count}")}
                                            </button>
                                        </Show>

                                        <section class="single-post__comments">
                                            <h3>"Comments"</h3>
                                            <ul>
                                                {comments
                                                    .iter()
                                                    .map(|c| view! { <li>{c.clone()}</li> })
                                                    .collect::<Vec<_>>()}
                                            </ul>
                                            <Show when=move || can().can_comment>
                                                <form class="single-post__comment-form" on:submit=on_comment>
                                                    <input
                                                        type="text"
                                                        placeholder="Add a comment"
                                                        prop:value=move || new_comment.get()
                                                        on:input=move |ev| {
                                                            new_comment.set(event_target_value(&ev));
                                                        }
                                                    />
                                                    <button class="btn btn--primary" type="submit">
                                                        "Post"
                                                    </button>
                                                </form>
                                            </Show>
                                        </section>

                                        <Show when=move || action_error.get().is_some() fallback=|| ()>
                                            <p class="single-post-page__error">
                                                {move || action_error.get().unwrap_or_default()}
                                            </p>
                                        </Show>
                                    </article>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
