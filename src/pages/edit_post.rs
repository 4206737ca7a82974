//! Edit an existing post: patches title, category, and content.
//!
//! The patch body carries only the edited fields, so likes and comments
//! accumulated since the page loaded are left alone.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;

/// Edit-post form, seeded from the fetched record.
#[component]
pub fn EditPostPage() -> impl IntoView {
    let params = use_params_map();
    let post_id = move || params.read().get("postId").unwrap_or_default();
    let post = LocalResource::new(move || {
        let id = post_id();
        async move { api::fetch_post(&id).await }
    });

    let title = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let seeded = RwSignal::new(false);
    let status = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    // Seed the form once when the record arrives.
    Effect::new(move || {
        if seeded.get_untracked() {
            return;
        }
        if let Some(Ok(loaded)) = post.get() {
            title.set(loaded.title);
            category.set(loaded.category);
            content.set(loaded.content);
            seeded.set(true);
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        status.set(None);

        #[cfg(feature = "hydrate")]
        {
            use crate::net::types::PostPatch;

            let id = post_id();
            submitting.set(true);
            leptos::task::spawn_local(async move {
                let patch = PostPatch {
                    title: Some(title.get_untracked()),
                    category: Some(category.get_untracked()),
                    content: Some(content.get_untracked()),
                    ..PostPatch::default()
                };
                let result = api::patch_post(&id, &patch).await;
                submitting.set(false);
                match result {
                    Ok(_) => {
                        if let Some(w) = web_sys::window() {
                            let _ = w
                                .location()
                                .set_href(&format!("/all-users-posts/{id}"));
                        }
                    }
                    Err(e) => {
                        leptos::logging::warn!("edit post failed: {e}");
                        status.set(Some(
                            "Failed to update post. Please try again later.".to_owned(),
                        ));
                    }
                }
            });
        }
    };

    view! {
        <div class="edit-post-page">
            <h2>"Edit Post"</h2>
            <Suspense fallback=move || view! { <p>"Loading post..."</p> }>
                {move || {
                    post.get()
                        .map(|loaded| match loaded {
                            Err(_) => view! {
                                <p class="edit-post-page__error">"Error loading post."</p>
                            }
                                .into_any(),
                            Ok(_) => view! {
                                <form class="edit-post-page__form" on:submit=on_submit>
                                    <label class="edit-post-page__label">
                                        "Title"
                                        <input
                                            type="text"
                                            prop:value=move || title.get()
                                            on:input=move |ev| title.set(event_target_value(&ev))
                                        />
                                    </label>

                                    <label class="edit-post-page__label">
                                        "Category"
                                        <input
                                            type="text"
                                            prop:value=move || category.get()
                                            on:input=move |ev| {
                                                category.set(event_target_value(&ev));
                                            }
                                        />
                                    </label>

                                    <label class="edit-post-page__label">
                                        "Content"
                                        <textarea
                                            rows="12"
                                            prop:value=move || content.get()
                                            on:input=move |ev| {
                                                content.set(event_target_value(&ev));
                                            }
                                        ></textarea>
                                    </label>

                                    <Show when=move || status.get().is_some() fallback=|| ()>
                                        <p class="edit-post-page__error">
                                            {move || status.get().unwrap_or_default()}
                                        </p>
                                    </Show>

                                    <button
                                        class="btn btn--primary"
                                        type="submit"
                                        prop:disabled=move || submitting.get()
                                    >
                                        {move || if submitting.get() { "Saving..." } else { "Save changes" }}
                                    </button>
                                </form>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
