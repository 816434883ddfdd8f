//! Project carousel with a readme detail panel.
//!
//! DESIGN
//! ======
//! One card is shown at a time; previous/next wrap around the ends. The
//! detail panel is keyed by index into the same list, so switching locale
//! (which reloads) never leaves a dangling selection.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;
use prefs::messages::Project;

use crate::state::i18n::{I18n, use_i18n};

/// Index after `current`, wrapping to the first card.
pub(crate) fn next_index(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Index before `current`, wrapping to the last card.
pub(crate) fn prev_index(current: usize, len: usize) -> usize {
    match (current, len) {
        (_, 0) => 0,
        (0, len) => len - 1,
        (current, _) => current - 1,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ProjectLabels {
    view_code: String,
    live_demo: String,
    details: String,
    about: String,
    features: String,
    installation: String,
    close: String,
}

impl ProjectLabels {
    fn new(i18n: &I18n) -> Self {
        Self {
            view_code: i18n.t("projects.viewCode"),
            live_demo: i18n.t("projects.liveDemo"),
            details: i18n.t("projects.details"),
            about: i18n.t("projects.about"),
            features: i18n.t("projects.features"),
            installation: i18n.t("projects.installation"),
            close: i18n.t("projects.close"),
        }
    }
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let i18n = use_i18n();
    let projects: Vec<Project> = i18n.items("projects.items");
    let len = projects.len();
    let projects = StoredValue::new(projects);
    let labels = StoredValue::new(ProjectLabels::new(&i18n));

    let single = len < 2;
    let active = RwSignal::new(0_usize);
    let selected = RwSignal::new(None::<usize>);

    let card = move || {
        let index = active.get();
        projects.with_value(|ps| ps.get(index).cloned()).map(|project| {
            view! { <ProjectCard project=project index=index labels=labels.get_value() selected=selected/> }
        })
    };

    let detail = move || {
        let index = selected.get()?;
        let project = projects.with_value(|ps| ps.get(index).cloned())?;
        Some(view! { <ProjectDetail project=project labels=labels.get_value() selected=selected/> })
    };

    view! {
        <section class="page projects">
            <header class="page__header">
                <span class="section-label">{i18n.t("projects.title")}</span>
                <h1>{i18n.t("projects.subtitle")}</h1>
            </header>

            <div class="carousel">
                <button
                    class="carousel__nav"
                    aria-label=i18n.t("projects.previous")
                    disabled=single
                    on:click=move |_| active.update(|i| *i = prev_index(*i, len))
                >
                    "‹"
                </button>
                <div class="carousel__slot">{card}</div>
                <button
                    class="carousel__nav"
                    aria-label=i18n.t("projects.next")
                    disabled=single
                    on:click=move |_| active.update(|i| *i = next_index(*i, len))
                >
                    "›"
                </button>
            </div>

            <div class="carousel__dots">
                {(0..len)
                    .map(|i| {
                        view! {
                            <button
                                class=move || if active.get() == i { "carousel__dot carousel__dot--active" } else { "carousel__dot" }
                                aria-label={(i + 1).to_string()}
                                on:click=move |_| active.set(i)
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>

            {detail}
        </section>
    }
}

#[component]
fn ProjectCard(project: Project, index: usize, labels: ProjectLabels, selected: RwSignal<Option<usize>>) -> impl IntoView {
    let has_demo = !project.demo.is_empty();
    view! {
        <article class="project-card">
            <h2 class="project-card__title">{project.title}</h2>
            <p class="project-card__description">{project.description}</p>
            <ul class="project-card__tech">
                {project.technologies.into_iter().map(|t| view! { <li class="tech-badge">{t}</li> }).collect_view()}
            </ul>
            <div class="project-card__actions">
                <a href=project.github target="_blank" rel="noopener noreferrer" class="button button--outline">
                    {labels.view_code}
                </a>
                {has_demo
                    .then(|| {
                        view! {
                            <a href=project.demo target="_blank" rel="noopener noreferrer" class="button button--outline">
                                {labels.live_demo}
                            </a>
                        }
                    })}
                <button class="button button--primary" on:click=move |_| selected.set(Some(index))>
                    {labels.details}
                </button>
            </div>
        </article>
    }
}

#[component]
fn ProjectDetail(project: Project, labels: ProjectLabels, selected: RwSignal<Option<usize>>) -> impl IntoView {
    let dialog_label = project.title.clone();
    let close_label = labels.close.clone();
    view! {
        <div class="project-detail" role="dialog" aria-label=dialog_label>
            <div class="project-detail__panel">
                <header class="project-detail__header">
                    <h2>{project.title}</h2>
                    <button class="project-detail__close" aria-label=close_label on:click=move |_| selected.set(None)>
                        "✕"
                    </button>
                </header>
                <h3>{labels.about}</h3>
                <p>{project.readme.about}</p>
                <h3>{labels.features}</h3>
                <ul class="project-detail__features">
                    {project.readme.features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
                </ul>
                <h3>{labels.installation}</h3>
                <pre class="project-detail__install"><code>{project.readme.installation}</code></pre>
                <a href=project.github target="_blank" rel="noopener noreferrer" class="button button--outline">
                    {labels.view_code}
                </a>
            </div>
        </div>
    }
}
