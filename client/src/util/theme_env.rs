//! Browser backends for theme resolution.
//!
//! `localStorage` backs [`Storage`], `prefers-color-scheme` backs
//! [`ColorScheme`], and the `<html>` element's class list backs
//! [`RootMarker`]. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Outside `hydrate` storage reports `Unavailable`, the system signal reads
//! light and marking is a no-op. Server rendering never resolves a theme.

#[cfg(test)]
#[path = "theme_env_test.rs"]
mod theme_env_test;

use prefs::{ColorScheme, PrefsError, RootMarker, Storage, Theme, ThemeController};

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

/// `window.matchMedia("(prefers-color-scheme: dark)")`.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemScheme;

/// `document.documentElement.classList`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentRoot;

/// Controller wired to the browser backends.
pub fn controller() -> ThemeController<BrowserStorage, SystemScheme, DocumentRoot> {
    ThemeController::new(BrowserStorage, SystemScheme, DocumentRoot)
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, PrefsError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(PrefsError::Unavailable)
}

impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|e| PrefsError::Backend {
                op: "get",
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(PrefsError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(|e| PrefsError::Backend {
                op: "set",
                key: key.to_owned(),
                reason: format!("{e:?}"),
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(PrefsError::Unavailable)
        }
    }
}

impl ColorScheme for SystemScheme {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            web_sys::window()
                .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
                .map_or(false, |mq| mq.matches())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

impl RootMarker for DocumentRoot {
    fn mark(&self, theme: Theme) {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
            else {
                return;
            };
            let classes = el.class_list();
            let _ = classes.remove_1(theme.flipped().as_str());
            let _ = classes.add_1(theme.as_str());
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = theme;
        }
    }
}
