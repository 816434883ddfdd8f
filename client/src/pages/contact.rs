//! Contact channels and the contact form.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::state::i18n::use_i18n;

const SOCIAL_LINKS: [(&str, &str); 3] = [
    ("social.github", "https://github.com/WebLucasDev"),
    ("social.linkedin", "https://www.linkedin.com/in/lucasvenancio-dev/"),
    ("social.instagram", "https://www.instagram.com/luca1_venancio/"),
];

#[component]
pub fn ContactPage() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section class="page contact">
            <header class="page__header">
                <span class="section-label">{i18n.t("contact.title")}</span>
                <h1>{i18n.t("contact.subtitle")}</h1>
                <p class="muted">{i18n.t("contact.description")}</p>
            </header>

            <div class="card-grid">
                <article class="card">
                    <h3>{i18n.t("contact.social.title")}</h3>
                    <div class="social-links">
                        {SOCIAL_LINKS
                            .into_iter()
                            .map(|(key, href)| {
                                view! {
                                    <a href=href target="_blank" rel="noopener noreferrer" class="social-link">
                                        {i18n.t(key)}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </article>

                <div class="info-badges">
                    <div class="info-badge">
                        <p class="muted">{i18n.t("contact.location.title")}</p>
                        <p>{i18n.t("contact.location.city")}</p>
                    </div>
                    <div class="info-badge">
                        <p class="muted">{i18n.t("contact.freelancer.title")}</p>
                        <p>{i18n.t("contact.freelancer.status")}</p>
                    </div>
                </div>
            </div>

            <div class="card contact__form">
                <ContactForm/>
            </div>
        </section>
    }
}
