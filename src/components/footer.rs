//! Site footer.

use leptos::prelude::*;

/// Footer with site links. Static content.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span class="footer__brand">"BlogScope"</span>
            <nav class="footer__nav">
                <a href="/about">"About"</a>
                <a href="/contact">"Contact"</a>
                <a href="/categories">"Categories"</a>
            </nav>
            <span class="footer__note">"Write. Share. Discover."</span>
        </footer>
    }
}
