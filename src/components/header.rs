//! Site header: navigation links, auth actions, and the theme toggle.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AuthState};
use crate::state::theme::ThemeState;
use crate::util::theme_pref;

/// Top navigation bar.
///
/// Public links always show; the account section switches between
/// sign-in/register and the signed-in menu with a logout button.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let theme = expect_context::<RwSignal<ThemeState>>();
    let navigate = use_navigate();

    let signed_in_name = move || {
        auth.get()
            .user
            .map(|u| u.fullname)
            .unwrap_or_default()
    };
    let is_signed_in = move || auth.get().user.is_some();

    let on_logout = move |_| {
        auth::logout(auth);
        navigate("/", NavigateOptions::default());
    };

    let on_toggle_theme = move |_| {
        theme.update(|t| {
            t.dark = !t.dark;
            theme_pref::set(t.dark);
        });
    };

    view! {
        <header class="header">
            <a class="header__brand" href="/">
                "BlogScope"
            </a>
            <nav class="header__nav">
                <a href="/">"Home"</a>
                <a href="/categories">"Categories"</a>
                <a href="/about">"About"</a>
                <a href="/contact">"Contact"</a>
                <Show when=is_signed_in fallback=|| ()>
                    <a href="/dashboard">"Dashboard"</a>
                    <a href="/all-users-posts">"All Posts"</a>
                    <a href="/my-posts">"My Posts"</a>
                </Show>
            </nav>
            <div class="header__account">
                <button
                    class="header__theme-toggle"
                    title="Toggle dark mode"
                    on:click=on_toggle_theme
                >
                    {move || if theme.get().dark { "\u{2600}" } else { "\u{1f319}" }}
                </button>
                <Show
                    when=is_signed_in
                    fallback=|| {
                        view! {
                            <a class="header__link" href="/sign-in">"Sign In"</a>
                            <a class="header__link header__link--primary" href="/register">
                                "Register"
                            </a>
                        }
                    }
                >
                    <a class="header__profile" href="/my-profile">
                        {signed_in_name}
                    </a>
                    <button class="header__logout" on:click=on_logout.clone()>
                        "Logout"
                    </button>
                </Show>
            </div>
        </header>
    }
}
