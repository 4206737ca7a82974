//! Profile page for the signed-in user.

use leptos::prelude::*;

use crate::permissions::Role;
use crate::state::auth::AuthState;

/// Shows the cached identity. The identity itself is read-only here;
/// edits go through the edit-user form and the resource client.
#[component]
pub fn MyProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="my-profile-page">
            <h2>"My Profile"</h2>
            {move || {
                match auth.get().user {
                    None => view! {
                        <p class="my-profile-page__empty">
                            "Sign in to see your profile. " <a href="/sign-in">"Sign In"</a>
                        </p>
                    }
                        .into_any(),
                    Some(user) => {
                        let role = Role::parse(Some(&user.role));
                        let edit_href = format!("/edit-user/{}", user.id);
                        let picture = (!user.profile_picture.is_empty()).then(|| {
                            view! {
                                <img
                                    class="profile-card__picture"
                                    src=user.profile_picture.clone()
                                    alt="Profile picture"
                                />
                            }
                        });
                        view! {
                            <div class="profile-card">
                                {picture}
                                <h3 class="profile-card__name">{user.fullname}</h3>
                                <p class="profile-card__email">{user.email}</p>
                                <p class="profile-card__role">{role.label()}</p>
                                <p class="profile-card__bio">{user.bio}</p>
                                <a class="btn" href=edit_href>
                                    "Edit profile"
                                </a>
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
