//! Registration page: creates a user record in the backend.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::types::User;

/// Validate the registration form. Returns the first problem found.
pub fn registration_error(
    fullname: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Option<&'static str> {
    if fullname.trim().is_empty() {
        return Some("Full name is required");
    }
    let email = email.trim();
    if email.is_empty() {
        return Some("Email is required");
    }
    if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
        return Some("Invalid email address");
    }
    if password.is_empty() {
        return Some("Password is required");
    }
    if role.trim().is_empty() {
        return Some("Role is required");
    }
    None
}

/// Registration form: full name, email, password, and role.
#[component]
pub fn RegisterPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let fullname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        if let Some(problem) = registration_error(
            &fullname.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &role.get_untracked(),
        ) {
            error.set(Some(problem.to_owned()));
            return;
        }
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            submitting.set(true);
            leptos::task::spawn_local(async move {
                let new_user = User {
                    id: uuid::Uuid::new_v4().to_string(),
                    fullname: fullname.get_untracked().trim().to_owned(),
                    email: email.get_untracked().trim().to_owned(),
                    password: password.get_untracked(),
                    role: role.get_untracked(),
                    profile_picture: String::new(),
                    bio: String::new(),
                };
                let result = crate::net::api::create_user(&new_user).await;
                submitting.set(false);
                match result {
                    Ok(_) => navigate("/sign-in", NavigateOptions::default()),
                    Err(e) => {
                        leptos::logging::warn!("registration failed: {e}");
                        error.set(Some(
                            "Registration failed. Please try again later.".to_owned(),
                        ));
                    }
                }
            });
        }
    };

    view! {
        <div class="register-page">
            <form class="register-page__form" on:submit=on_submit>
                <h2>"Create your account"</h2>

                <label class="register-page__label">
                    "Full name"
                    <input
                        type="text"
                        autocomplete="name"
                        prop:value=move || fullname.get()
                        on:input=move |ev| fullname.set(event_target_value(&ev))
                    />
                </label>

                <label class="register-page__label">
                    "Email"
                    <input
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label class="register-page__label">
                    "Password"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <label class="register-page__label">
                    "Role"
                    <select
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="">"Select a role"</option>
                        <option value="admin">"Admin"</option>
                        <option value="editor">"Editor"</option>
                        <option value="viewer">"Viewer"</option>
                    </select>
                </label>

                <Show when=move || error.get().is_some() fallback=|| ()>
                    <p class="register-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button
                    class="btn btn--primary"
                    type="submit"
                    prop:disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Creating..." } else { "Register" }}
                </button>
            </form>
        </div>
    }
}
