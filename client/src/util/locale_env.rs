//! Browser helpers for the locale round trip.
//!
//! The server writes the resolved locale into `<html lang>`; the hydrating
//! client reads it back instead of re-resolving. Changing locale ends with a
//! full reload so the server resolves again from the new cookie.

#[cfg(test)]
#[path = "locale_env_test.rs"]
mod locale_env_test;

use prefs::Locale;

/// Locale the server rendered this document with.
pub fn document_locale() -> Option<Locale> {
    #[cfg(feature = "hydrate")]
    {
        let lang = web_sys::window()?
            .document()?
            .document_element()?
            .get_attribute("lang")?;
        Locale::from_tag(&lang)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Reload the current page.
pub fn reload() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
