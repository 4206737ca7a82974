//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::protected_route::Protected;
use crate::pages::{
    about::AboutPage, all_posts::AllPostsPage, categories::CategoriesPage, contact::ContactPage,
    dashboard::DashboardPage, edit_post::EditPostPage, edit_user::EditUserPage, home::HomePage,
    my_posts::MyPostsPage, my_profile::MyProfilePage, post_editor::PostEditorPage,
    register::RegisterPage, sign_in::SignInPage, single_post::SinglePostPage,
};
use crate::state::auth::{self, AuthState};
use crate::state::theme::ThemeState;
use crate::util::theme_pref;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and theme contexts and sets up client-side routing.
/// The auth context starts in its loading state; the startup effect below
/// restores the persisted session exactly once, which is what lets the
/// route guard hold protected views back until the store has been read.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth_state = RwSignal::new(AuthState::default());
    let theme = RwSignal::new(ThemeState::default());

    provide_context(auth_state);
    provide_context(theme);

    // One-time startup: restore the persisted session and theme choice.
    Effect::new(move || {
        auth::initialize(auth_state);
        let dark = theme_pref::initial();
        theme_pref::apply(dark);
        theme.update(|t| t.dark = dark);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/blogscope.css"/>
        <Title text="BlogScope"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <ParentRoute path=StaticSegment("") view=Layout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("categories") view=CategoriesPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("sign-in") view=SignInPage/>
                    <Route
                        path=StaticSegment("dashboard")
                        view=|| view! { <Protected><DashboardPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("create-posts")
                        view=|| view! { <Protected><PostEditorPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("all-users-posts")
                        view=|| view! { <Protected><AllPostsPage/></Protected> }
                    />
                    <Route
                        path=StaticSegment("my-posts")
                        view=|| view! { <Protected><MyPostsPage/></Protected> }
                    />
                    <Route
                        path=(StaticSegment("all-users-posts"), ParamSegment("postId"))
                        view=SinglePostPage
                    />
                    <Route path=StaticSegment("my-profile") view=MyProfilePage/>
                    <Route
                        path=(StaticSegment("edit-user"), ParamSegment("id"))
                        view=EditUserPage
                    />
                    <Route
                        path=(StaticSegment("edit-post"), ParamSegment("postId"))
                        view=EditPostPage
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
