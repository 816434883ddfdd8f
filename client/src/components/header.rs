//! Fixed top bar with navigation, language switcher and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once above the routes so it survives client-side navigation.
//! The mobile drawer shares the same links and closes on selection.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::language_switcher::LanguageSwitcher;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::i18n::use_i18n;
use crate::state::ui::UiState;

/// Top-level routes as (message key, path).
pub const NAV_ITEMS: [(&str, &str); 4] = [
    ("navigation.home", "/"),
    ("navigation.about", "/about"),
    ("navigation.projects", "/projects"),
    ("navigation.contact", "/contact"),
];

/// Exact path match, ignoring a trailing slash on non-root paths.
fn is_active(pathname: &str, href: &str) -> bool {
    let trimmed = if pathname.len() > 1 { pathname.trim_end_matches('/') } else { pathname };
    trimmed == href
}

fn nav_class(active: bool) -> &'static str {
    if active { "nav-link nav-link--active" } else { "nav-link" }
}

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let i18n = use_i18n();
    let pathname = use_location().pathname;

    let menu_labels = (i18n.t("navigation.openMenu"), i18n.t("navigation.closeMenu"));

    let links = move |mobile: bool| {
        NAV_ITEMS
            .into_iter()
            .map(|(key, href)| {
                let label = i18n.t(key);
                view! {
                    <a
                        href=href
                        class=move || {
                            let class = nav_class(is_active(&pathname.get(), href));
                            if mobile { format!("{class} nav-link--mobile") } else { class.to_owned() }
                        }
                        on:click=move |_| ui.update(UiState::close_mobile_menu)
                    >
                        {label}
                    </a>
                }
            })
            .collect_view()
    };
    let desktop_links = links(false);
    let mobile_links = links(true);

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a href="/" class="site-header__brand" on:click=move |_| ui.update(UiState::close_mobile_menu)>
                    "Lucas"
                    <span class="accent">"."</span>
                </a>

                <nav class="site-nav site-nav--desktop">
                    {desktop_links}
                    <div class="site-nav__controls">
                        <LanguageSwitcher/>
                        <ThemeToggle/>
                    </div>
                </nav>

                <div class="site-nav__compact">
                    <LanguageSwitcher/>
                    <ThemeToggle/>
                    <button
                        class="site-nav__menu-button"
                        aria-label=move || {
                            if ui.get().mobile_menu_open { menu_labels.1.clone() } else { menu_labels.0.clone() }
                        }
                        on:click=move |_| ui.update(UiState::toggle_mobile_menu)
                    >
                        {move || if ui.get().mobile_menu_open { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
        </header>

        <nav class=move || {
            if ui.get().mobile_menu_open { "site-nav site-nav--mobile site-nav--open" } else { "site-nav site-nav--mobile" }
        }>
            {mobile_links}
        </nav>
    }
}
