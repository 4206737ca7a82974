//! Shared page chrome: header, routed content, footer.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::state::theme::ThemeState;

/// Layout wrapper rendered around every routed page.
#[component]
pub fn Layout() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    let app_class = move || {
        if theme.get().dark {
            "app app--dark"
        } else {
            "app"
        }
    };

    view! {
        <div class=app_class>
            <Header/>
            <main class="app__content">
                <Outlet/>
            </main>
            <Footer/>
        </div>
    }
}
