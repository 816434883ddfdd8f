//! Resolved locale and its message bundle, shared through context.
//!
//! SYSTEM CONTEXT
//! ==============
//! On the server the locale is resolved per request and an `I18n` is placed in
//! context before the app renders. In the browser there is no request, so the
//! hydrating app rebuilds the same value from `<html lang>`.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use std::sync::Arc;

use leptos::prelude::*;
use prefs::{Locale, Messages};
use serde::de::DeserializeOwned;

use crate::util::locale_env;

/// Locale plus translations for the current render.
#[derive(Clone, Debug)]
pub struct I18n {
    locale: Locale,
    messages: Arc<Messages>,
}

impl I18n {
    pub fn new(locale: Locale, messages: Arc<Messages>) -> Self {
        Self { locale, messages }
    }

    /// Build from the bundle compiled into the binary.
    pub fn embedded(locale: Locale) -> Self {
        let messages = Messages::embedded(locale).unwrap_or_else(|e| {
            #[cfg(feature = "hydrate")]
            log::error!("message bundle unavailable: {e}");
            #[cfg(not(feature = "hydrate"))]
            let _ = e;
            Messages::empty()
        });
        Self::new(locale, Arc::new(messages))
    }

    /// Used when no request-scoped value was provided: the document's
    /// `lang` in the browser, the default locale elsewhere.
    pub fn fallback() -> Self {
        Self::embedded(locale_env::document_locale().unwrap_or_default())
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Translated string at a dotted key.
    pub fn t(&self, key: &str) -> String {
        self.messages.text(key)
    }

    /// Typed content list at a dotted key.
    pub fn items<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        self.messages.items(key)
    }
}

/// Current `I18n` from context, or [`I18n::fallback`] outside the app tree.
pub fn use_i18n() -> I18n {
    use_context::<I18n>().unwrap_or_else(I18n::fallback)
}
