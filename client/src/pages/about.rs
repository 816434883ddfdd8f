//! Biography, education, certifications and courses.

use leptos::prelude::*;
use prefs::messages::{Certification, Course, EducationItem};

use crate::state::i18n::use_i18n;

#[component]
pub fn AboutPage() -> impl IntoView {
    let i18n = use_i18n();
    let education: Vec<EducationItem> = i18n.items("about.education.items");
    let certifications: Vec<Certification> = i18n.items("about.certifications.items");
    let courses: Vec<Course> = i18n.items("about.courses.items");

    view! {
        <section class="page about">
            <header class="page__header">
                <span class="section-label">{i18n.t("about.title")}</span>
                <h1>{i18n.t("about.subtitle")}</h1>
            </header>

            <div class="about__intro">
                <p>
                    <strong>{i18n.t("about.intro")}</strong>
                    " "
                    {i18n.t("about.introDescription")}
                </p>
                <p class="about__experience">
                    <span class="accent">{i18n.t("about.experience.years")}</span>
                    " "
                    {i18n.t("about.experience.description")}
                </p>
                <a href="/contact" class="button button--primary">{i18n.t("about.contactMe")}</a>
            </div>

            <div class="card-grid">
                <article class="card">
                    <h2>{i18n.t("about.education.title")}</h2>
                    {education
                        .into_iter()
                        .map(|item| {
                            view! {
                                <div class="timeline-item">
                                    <h3>{item.degree}</h3>
                                    <p class="muted">{item.institution} " · " {item.period}</p>
                                    <p>{item.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </article>

                <article class="card">
                    <h2>{i18n.t("about.certifications.title")}</h2>
                    <ul>
                        {certifications
                            .into_iter()
                            .map(|c| view! { <li>{c.name} <span class="muted">" · " {c.issuer} " · " {c.year}</span></li> })
                            .collect_view()}
                    </ul>
                </article>

                <article class="card">
                    <h2>{i18n.t("about.courses.title")}</h2>
                    <ul>
                        {courses
                            .into_iter()
                            .map(|c| view! { <li>{c.name} <span class="muted">" · " {c.platform} " · " {c.hours}</span></li> })
                            .collect_view()}
                    </ul>
                </article>

                <article class="card">
                    <h2>{i18n.t("about.experience.title")}</h2>
                    <p class="about__years">{i18n.t("about.experience.years")}</p>
                    <p class="muted">{i18n.t("about.experience.description")}</p>
                </article>
            </div>
        </section>
    }
}
