//! Contact form with a simulated send.
//!
//! Fields are validated by the browser (`required`, `type="email"`). Submit
//! runs the idle -> submitting -> success -> idle cycle from
//! [`crate::state::contact`]; nothing leaves the page.

use leptos::prelude::*;

use crate::state::contact::ContactStatus;
use crate::state::i18n::use_i18n;

#[component]
pub fn ContactForm() -> impl IntoView {
    let i18n = use_i18n();
    let status = RwSignal::new(ContactStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_disabled() {
            return;
        }

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::state::contact::submit(
            move |next| status.set(next),
            gloo_timers::future::sleep,
        ));
    };

    let field = |id: &'static str, key: &str| (id, i18n.t(&format!("contact.form.{key}")), i18n.t(&format!("contact.form.{key}Placeholder")));
    let (name_id, name_label, name_placeholder) = field("name", "name");
    let (email_id, email_label, email_placeholder) = field("email", "email");
    let (message_id, message_label, message_placeholder) = field("message", "message");
    let title = i18n.t("contact.form.title");

    view! {
        <form class="contact-form" on:submit=on_submit>
            <h2 class="contact-form__title">{title}</h2>
            <div class="contact-form__field">
                <label for=name_id>{name_label}</label>
                <input type="text" id=name_id name=name_id placeholder=name_placeholder required/>
            </div>
            <div class="contact-form__field">
                <label for=email_id>{email_label}</label>
                <input type="email" id=email_id name=email_id placeholder=email_placeholder required/>
            </div>
            <div class="contact-form__field">
                <label for=message_id>{message_label}</label>
                <textarea id=message_id name=message_id rows="4" placeholder=message_placeholder required></textarea>
            </div>
            <button
                type="submit"
                class="contact-form__submit"
                disabled=move || status.get().is_disabled()
            >
                {move || {
                    let current = status.get();
                    let icon = match current {
                        ContactStatus::Idle => "➤",
                        ContactStatus::Submitting => "…",
                        ContactStatus::Success => "✓",
                    };
                    format!("{icon} {}", i18n.t(current.label_key()))
                }}
            </button>
        </form>
    }
}
