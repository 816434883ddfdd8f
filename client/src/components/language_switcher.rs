//! Locale dropdown.
//!
//! Selecting a locale persists it through the server and reloads the page,
//! so every string re-resolves from the new cookie. Re-selecting the current
//! locale still reloads. A press anywhere outside the switcher closes the
//! menu without choosing.

#[cfg(test)]
#[path = "language_switcher_test.rs"]
mod language_switcher_test;

use leptos::html::Div;
use leptos::prelude::*;
use prefs::Locale;

use crate::state::i18n::use_i18n;

/// Whether a pointer press should dismiss the menu.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn dismisses_menu(open: bool, pressed_inside: bool) -> bool {
    open && !pressed_inside
}

#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let i18n = use_i18n();
    let current = i18n.locale();
    let open = RwSignal::new(false);
    let root = NodeRef::<Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let handle = window_event_listener(leptos::ev::mousedown, move |ev| {
            let target = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            let inside = root.get_untracked().is_some_and(|el| el.contains(target.as_ref()));
            if dismisses_menu(open.get_untracked(), inside) {
                open.set(false);
            }
        });
        on_cleanup(move || handle.remove());
    }

    let choose = move |locale: Locale| {
        open.set(false);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::set_locale(locale).await {
                Ok(()) => crate::util::locale_env::reload(),
                Err(e) => log::warn!("locale change to {locale} failed: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = locale;
    };

    view! {
        <div class="lang-switcher" node_ref=root>
            <button
                class="lang-switcher__trigger"
                aria-label=i18n.t("language.select")
                aria-expanded=move || if open.get() { "true" } else { "false" }
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="lang-switcher__globe">"🌐"</span>
                <span class="lang-switcher__flag">{current.flag()}</span>
            </button>
            <Show when=move || open.get()>
                <ul class="lang-switcher__menu">
                    {Locale::ALL
                        .into_iter()
                        .map(|locale| {
                            view! {
                                <li>
                                    <button class="lang-switcher__option" on:click=move |_| choose(locale)>
                                        <span>{locale.flag()}</span>
                                        <span>{locale.native_name()}</span>
                                        {(locale == current)
                                            .then(|| view! { <span class="lang-switcher__check">"✓"</span> })}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>
        </div>
    }
}
