//! Contact page. The form is presentational; there is no backend inbox.

use leptos::prelude::*;

/// Contact form and details.
#[component]
pub fn ContactPage() -> impl IntoView {
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        sent.set(true);
    };

    view! {
        <div class="contact-page">
            <h1>"Contact Us"</h1>
            <Show
                when=move || sent.get()
                fallback=move || {
                    view! {
                        <form class="contact-page__form" on:submit=on_submit>
                            <label>
                                "Name" <input type="text" name="name"/>
                            </label>
                            <label>
                                "Email" <input type="email" name="email"/>
                            </label>
                            <label>
                                "Message" <textarea rows="6" name="message"></textarea>
                            </label>
                            <button class="btn btn--primary" type="submit">
                                "Send"
                            </button>
                        </form>
                    }
                }
            >
                <p class="contact-page__thanks">"Thanks for reaching out!"</p>
            </Show>
        </div>
    }
}
