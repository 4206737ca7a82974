//! Route guard wrapper for views that require a signed-in user.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AuthState, GuardOutcome};

/// Wraps a protected view.
///
/// While the session restore is in flight nothing renders. Once resolved,
/// an unauthenticated visitor is redirected to `/sign-in`; the original
/// target is discarded. The decision is reactive, so signing out while a
/// protected view is mounted re-triggers the redirect.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if auth::guard_outcome(&auth.get()) == GuardOutcome::RedirectToSignIn {
            navigate("/sign-in", NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || auth::guard_outcome(&auth.get()) == GuardOutcome::Allow
            fallback=|| ()
        >
            {children()}
        </Show>
    }
}
