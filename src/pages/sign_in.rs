//! Sign-in page.
//!
//! Looks the user up by email, checks the password, and on success routes
//! to the dashboard. Failures stay on the form as inline messages; the
//! session is untouched until the credentials check out.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Email + password form.
#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            submitting.set(true);
            leptos::task::spawn_local(async move {
                let entered_email = email.get_untracked();
                let entered_password = password.get_untracked();
                let result =
                    crate::state::auth::login(entered_email.trim(), &entered_password).await;
                submitting.set(false);
                match result {
                    Ok(user) => {
                        crate::state::auth::complete_login(auth, user);
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        }
    };

    view! {
        <div class="sign-in-page">
            <form class="sign-in-page__form" on:submit=on_submit>
                <h2>"Welcome back"</h2>

                <label class="sign-in-page__label">
                    "Email"
                    <input
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>

                <label class="sign-in-page__label">
                    "Password"
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || error.get().is_some() fallback=|| ()>
                    <p class="sign-in-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <button
                    class="btn btn--primary"
                    type="submit"
                    prop:disabled=move || submitting.get()
                >
                    {move || if submitting.get() { "Logging in..." } else { "Login" }}
                </button>

                <p class="sign-in-page__hint">
                    "No account yet? " <a href="/register">"Register"</a>
                </p>
            </form>
        </div>
    }
}
