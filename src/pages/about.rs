//! About page. Static marketing content.

use leptos::prelude::*;

/// About BlogScope.
#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About BlogScope"</h1>
            <p>
                "BlogScope is a community blogging platform: write posts, sort \
                 them into categories, and react to what others publish."
            </p>
            <section class="about-page__values">
                <div class="value-card">
                    <h3>"Write"</h3>
                    <p>"A focused editor that stays out of your way."</p>
                </div>
                <div class="value-card">
                    <h3>"Share"</h3>
                    <p>"Categories and feeds that bring readers to your work."</p>
                </div>
                <div class="value-card">
                    <h3>"Discover"</h3>
                    <p>"Likes and comments that surface the best writing."</p>
                </div>
            </section>
        </div>
    }
}
