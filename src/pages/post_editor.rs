//! Post editor: create a new post.
//!
//! The content field holds the rich-text editor's HTML output; here it is
//! a plain textarea bound to the same field. New posts get a generated id,
//! the current timestamp, and empty like/comment lists.

use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::net::types::{Category, User};
use crate::state::auth::AuthState;

/// Author select options and category options for the form.
async fn load_form_data() -> Result<(Vec<User>, Vec<Category>), ApiError> {
    let users = api::fetch_users().await?;
    let categories = api::fetch_categories().await?;
    Ok((users, categories))
}

/// Create-post form.
#[component]
pub fn PostEditorPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let form_data = LocalResource::new(|| load_form_data());

    let title = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let created_by = RwSignal::new(String::new());
    let status = RwSignal::new(None::<Result<String, String>>);
    let submitting = RwSignal::new(false);

    // Default the author select to the signed-in user once known.
    Effect::new(move || {
        if created_by.get_untracked().is_empty() {
            if let Some(user) = auth.get().user {
                created_by.set(user.id);
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        if title.get_untracked().trim().is_empty()
            || category.get_untracked().is_empty()
            || content.get_untracked().trim().is_empty()
            || created_by.get_untracked().is_empty()
        {
            status.set(Some(Err("All fields are required.".to_owned())));
            return;
        }
        status.set(None);

        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::Post;
            use crate::util::time;

            submitting.set(true);
            leptos::task::spawn_local(async move {
                let post = Post {
                    id: uuid::Uuid::new_v4().to_string(),
                    title: title.get_untracked().trim().to_owned(),
                    category: category.get_untracked(),
                    content: content.get_untracked(),
                    created_by: created_by.get_untracked(),
                    created_at: time::now_iso(),
                    likes: Vec::new(),
                    comments: Vec::new(),
                };
                let result = api::create_post(&post).await;
                submitting.set(false);
                match result {
                    Ok(_) => {
                        title.set(String::new());
                        category.set(String::new());
                        content.set(String::new());
                        status.set(Some(Ok("Post published.".to_owned())));
                    }
                    Err(e) => {
                        leptos::logging::warn!("create post failed: {e}");
                        status.set(Some(Err(
                            "Failed to save post. Please try again later.".to_owned(),
                        )));
                    }
                }
            });
        }
    };

    view! {
        <div class="post-editor-page">
            <h2>"Create New Post"</h2>
            <form class="post-editor-page__form" on:submit=on_submit>
                <label class="post-editor-page__label">
                    "Title"
                    <input
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>

                <label class="post-editor-page__label">
                    "Category"
                    <select
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        <option value="">"Select a category"</option>
                        {move || {
                            form_data
                                .get()
                                .and_then(Result::ok)
                                .map(|(_, categories)| {
                                    categories
                                        .into_iter()
                                        .map(|c| {
                                            view! {
                                                <option value=c.name.clone()>{c.name.clone()}</option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </select>
                </label>

                <label class="post-editor-page__label">
                    "Author"
                    <select
                        prop:value=move || created_by.get()
                        on:change=move |ev| created_by.set(event_target_value(&ev))
                    >
                        <option value="">"Select a user"</option>
                        {move || {
                            form_data
                                .get()
                                .and_then(Result::ok)
                                .map(|(users, _)| {
                                    users
                                        .into_iter()
                                        .map(|u| {
                                            view! {
                                                <option value=u.id.clone()>{u.fullname}</option>
                                            }
                                        })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </select>
                </label>

                <label class="post-editor-page__label">
                    "Content"
                    <textarea
                        rows="12"
                        prop:value=move || content.get()
                        on:input=move |ev| content.set(event_target_value(&ev))
                    ></textarea>
                </label>

                {move || {
                    status
                        .get()
                        .map(|s| match s {
                            Ok(msg) => view! { <p class="post-editor-page__ok">{msg}</p> }
                                .into_any(),
                            Err(msg) => view! { <p class="post-editor-page__error">{msg}</p> }
                                .into_any(),
                        })
                }}

                <button
                    class="btn btn--primary"
                    type="submit"
                    prop:disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Saving..." } else { "Publish" }}
                </button>
            </form>
        </div>
    }
}
