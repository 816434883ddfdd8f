//! Landing page: introduction and technology list.

use leptos::prelude::*;

use crate::state::i18n::use_i18n;

#[component]
pub fn HomePage() -> impl IntoView {
    let i18n = use_i18n();
    let technologies: Vec<String> = i18n.items("home.technologies");

    view! {
        <section class="hero">
            <p class="hero__greeting">{i18n.t("home.greeting")}</p>
            <h1 class="hero__name">{i18n.t("home.name")}</h1>
            <p class="hero__role">{i18n.t("home.role")}</p>
            <p class="hero__description">{i18n.t("home.description")}</p>
            <div class="hero__actions">
                <a href="/projects" class="button button--primary">{i18n.t("home.viewProjects")}</a>
                <a href="/contact" class="button button--outline">{i18n.t("home.contactMe")}</a>
            </div>
        </section>

        <section class="tech-stack">
            <h2 class="section-label">{i18n.t("home.techSection")}</h2>
            <ul class="tech-stack__list">
                {technologies
                    .into_iter()
                    .map(|tech| view! { <li class="tech-badge">{tech}</li> })
                    .collect_view()}
            </ul>
            <p class="tech-stack__note">{i18n.t("home.alwaysLearning")}</p>
        </section>
    }
}
