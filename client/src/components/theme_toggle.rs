//! Dark/light toggle button.
//!
//! Until the theme resolves on the client the button renders with the same
//! footprint but no icon, so the server-rendered frame never shows a guess.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;
use prefs::{Theme, ThemeState};

use crate::state::i18n::use_i18n;
use crate::state::ui::UiState;
use crate::util::theme_env;

/// Icon for the current state; empty while unresolved.
fn icon(state: ThemeState) -> &'static str {
    match state {
        ThemeState::Unresolved => "",
        ThemeState::Resolved(Theme::Dark) => "☾",
        ThemeState::Resolved(Theme::Light) => "☀",
    }
}

fn class(state: ThemeState) -> &'static str {
    match state {
        ThemeState::Unresolved => "theme-toggle theme-toggle--pending",
        ThemeState::Resolved(Theme::Dark) => "theme-toggle theme-toggle--dark",
        ThemeState::Resolved(Theme::Light) => "theme-toggle theme-toggle--light",
    }
}

/// Accessible label describing what a click will do.
fn label_key(state: ThemeState) -> &'static str {
    match state {
        ThemeState::Unresolved => "theme.toggle",
        ThemeState::Resolved(Theme::Dark) => "theme.toLight",
        ThemeState::Resolved(Theme::Light) => "theme.toDark",
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let i18n = use_i18n();

    let on_toggle = move |_| {
        let next = theme_env::controller().toggle(ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };

    view! {
        <button
            class=move || class(ui.get().theme)
            aria-label=move || i18n.t(label_key(ui.get().theme))
            on:click=on_toggle
        >
            <span class="theme-toggle__icon">{move || icon(ui.get().theme)}</span>
        </button>
    }
}
