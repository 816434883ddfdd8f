//! Supported locales and per-request locale resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server resolves a locale for every page request before any content is
//! rendered. The chain is: persisted `locale` cookie, then the first tag of
//! `Accept-Language`, then the configured default. The result is always a
//! supported [`Locale`]; bad input never surfaces as an error.

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PrefsError;
use crate::store::Storage;

/// Cookie holding the persisted locale preference.
pub const LOCALE_COOKIE: &str = "locale";

/// A supported language variant of the site content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Brazilian Portuguese.
    #[default]
    Pt,
    /// English.
    En,
}

impl Locale {
    /// Every supported locale, in switcher order.
    pub const ALL: [Locale; 2] = [Locale::Pt, Locale::En];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pt => "pt",
            Self::En => "en",
        }
    }

    /// Name of the language written in that language.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Self::Pt => "Português",
            Self::En => "English",
        }
    }

    #[must_use]
    pub fn flag(self) -> &'static str {
        match self {
            Self::Pt => "🇧🇷",
            Self::En => "🇺🇸",
        }
    }

    /// Exact match against a supported tag. Case and surrounding whitespace
    /// are ignored; region subtags are not stripped here.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL.into_iter().find(|l| l.as_str().eq_ignore_ascii_case(tag))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| PrefsError::UnsupportedLocale(s.to_owned()))
    }
}

/// Pick a locale from an `Accept-Language` header value.
///
/// Only the first listed tag is considered. It is reduced to its base subtag
/// (`pt-BR;q=0.9` -> `pt`) and checked against the supported set.
#[must_use]
pub fn negotiate(accept_language: &str) -> Option<Locale> {
    let first = accept_language.split(',').next()?;
    let tag = first.split(';').next()?.trim();
    let base = tag.split(['-', '_']).next()?;
    if base.is_empty() {
        return None;
    }
    Locale::from_tag(base)
}

// =============================================================================
// RESOLVER
// =============================================================================

/// Deterministic cookie -> header -> default fallback chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocaleResolver {
    default: Locale,
}

impl LocaleResolver {
    #[must_use]
    pub fn new(default: Locale) -> Self {
        Self { default }
    }

    #[must_use]
    pub fn default_locale(&self) -> Locale {
        self.default
    }

    /// Resolve from the raw persisted value and the raw header value.
    ///
    /// A persisted value that is present but unsupported goes straight to the
    /// default; the header is only consulted when nothing is persisted.
    #[must_use]
    pub fn resolve(&self, persisted: Option<&str>, accept_language: Option<&str>) -> Locale {
        if let Some(raw) = persisted.filter(|v| !v.trim().is_empty()) {
            return Locale::from_tag(raw).unwrap_or_else(|| {
                tracing::debug!(value = raw, default = %self.default, "unsupported persisted locale");
                self.default
            });
        }

        accept_language.and_then(negotiate).unwrap_or(self.default)
    }

    /// Resolve using a [`Storage`] backend for the persisted value.
    pub fn resolve_from<S: Storage>(&self, store: &S, accept_language: Option<&str>) -> Locale {
        let persisted = match store.get(LOCALE_COOKIE) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "locale preference unreadable");
                None
            }
        };
        self.resolve(persisted.as_deref(), accept_language)
    }
}
