//! Edit a user record: full replace via PUT.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::api;
use crate::net::types::User;

/// Edit-user form, seeded from the fetched record. Role and password are
/// carried over unchanged; the form edits the profile fields.
#[component]
pub fn EditUserPage() -> impl IntoView {
    let params = use_params_map();
    let user_id = move || params.read().get("id").unwrap_or_default();
    let record = LocalResource::new(move || {
        let id = user_id();
        async move { api::fetch_user(&id).await }
    });

    let original = RwSignal::new(None::<User>);
    let fullname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let bio = RwSignal::new(String::new());
    let profile_picture = RwSignal::new(String::new());
    let status = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    // Seed the form once when the record arrives.
    Effect::new(move || {
        if original.get_untracked().is_some() {
            return;
        }
        if let Some(Ok(user)) = record.get() {
            fullname.set(user.fullname.clone());
            email.set(user.email.clone());
            bio.set(user.bio.clone());
            profile_picture.set(user.profile_picture.clone());
            original.set(Some(user));
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let Some(base) = original.get_untracked() else {
            return;
        };
        if fullname.get_untracked().trim().is_empty() || email.get_untracked().trim().is_empty()
        {
            status.set(Some("Name and email are required.".to_owned()));
            return;
        }
        status.set(None);

        #[cfg(feature = "hydrate")]
        {
            let updated = User {
                fullname: fullname.get_untracked().trim().to_owned(),
                email: email.get_untracked().trim().to_owned(),
                bio: bio.get_untracked(),
                profile_picture: profile_picture.get_untracked(),
                ..base
            };
            submitting.set(true);
            leptos::task::spawn_local(async move {
                let result = api::replace_user(&updated).await;
                submitting.set(false);
                match result {
                    Ok(_) => {
                        if let Some(w) = web_sys::window() {
                            let _ = w.location().set_href("/my-profile");
                        }
                    }
                    Err(e) => {
                        leptos::logging::warn!("edit user failed: {e}");
                        status.set(Some(
                            "Failed to update profile. Please try again later.".to_owned(),
                        ));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = base;
        }
    };

    view! {
        <div class="edit-user-page">
            <h2>"Edit Profile"</h2>
            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    record
                        .get()
                        .map(|loaded| match loaded {
                            Err(_) => view! {
                                <p class="edit-user-page__error">"Error loading profile."</p>
                            }
                                .into_any(),
                            Ok(_) => view! {
                                <form class="edit-user-page__form" on:submit=on_submit>
                                    <label class="edit-user-page__label">
                                        "Full name"
                                        <input
                                            type="text"
                                            prop:value=move || fullname.get()
                                            on:input=move |ev| {
                                                fullname.set(event_target_value(&ev));
                                            }
                                        />
                                    </label>

                                    <label class="edit-user-page__label">
                                        "Email"
                                        <input
                                            type="email"
                                            prop:value=move || email.get()
                                            on:input=move |ev| email.set(event_target_value(&ev))
                                        />
                                    </label>

                                    <label class="edit-user-page__label">
                                        "Profile picture URL"
                                        <input
                                            type="url"
                                            prop:value=move || profile_picture.get()
                                            on:input=move |ev| {
                                                profile_picture.set(event_target_value(&ev));
                                            }
                                        />
                                    </label>

                                    <label class="edit-user-page__label">
                                        "Bio"
                                        <textarea
                                            rows="4"
                                            prop:value=move || bio.get()
                                            on:input=move |ev| bio.set(event_target_value(&ev))
                                        ></textarea>
                                    </label>

                                    <Show when=move || status.get().is_some() fallback=|| ()>
                                        <p class="edit-user-page__error">
                                            {move || status.get().unwrap_or_default()}
                                        </p>
                                    </Show>

                                    <button
                                        class="btn btn--primary"
                                        type="submit"
                                        prop:disabled=move || submitting.get()
                                    >
                                        {move || if submitting.get() { "Saving..." } else { "Save" }}
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
