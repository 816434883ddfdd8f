//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::pages::{about::AboutPage, contact::ContactPage, home::HomePage, projects::ProjectsPage};
use crate::state::i18n::{I18n, use_i18n};
use crate::state::ui::UiState;
use crate::util::theme_env;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `lang` carries the resolved locale so the hydrating client renders the
/// same bundle the server did.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let lang = use_i18n().locale().as_str();
    view! {
        <!DOCTYPE html>
        <html lang=lang>
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
/// Provides the i18n and UI contexts, resolves the theme once on the client,
/// and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    if use_context::<I18n>().is_none() {
        provide_context(I18n::fallback());
    }
    let i18n = use_i18n();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Effects only run in the browser, so SSR output stays `Unresolved`.
    Effect::new(move |_| {
        let resolved = theme_env::controller().resolve();
        ui.update(|u| u.theme = resolved);
    });

    let not_found = i18n.t("meta.notFound");

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=i18n.t("meta.title")/>
        <Meta name="description" content=i18n.t("meta.description")/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=move || not_found.clone()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
        </Router>
    }
}
