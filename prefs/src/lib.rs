//! Preference resolution and content lookup shared by `server` and `client`.
//!
//! This crate owns the two decisions the site makes before rendering anything:
//! which locale to serve (cookie, then `Accept-Language`, then the configured
//! default) and which color theme to paint (local storage, then the system
//! color-scheme signal, then light). It has no UI or HTTP dependencies; storage
//! and environment signals are injected through small traits so both sides of
//! the app, and the tests, can supply their own backends.

pub mod locale;
pub mod messages;
pub mod store;
pub mod theme;

pub use locale::{LOCALE_COOKIE, Locale, LocaleResolver};
pub use messages::{Catalog, Messages, MessagesError};
pub use store::{MemoryStorage, PreferenceService, Storage};
pub use theme::{ColorScheme, RootMarker, THEME_KEY, Theme, ThemeController, ThemePersistence, ThemeState};

/// Error returned by preference parsing and storage backends.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PrefsError {
    /// The tag is not one of the supported locales.
    #[error("unsupported locale tag: {0:?}")]
    UnsupportedLocale(String),
    /// The value is neither `dark` nor `light`.
    #[error("invalid theme value: {0:?}")]
    InvalidTheme(String),
    /// The storage backend is missing (e.g. no `window` or storage disabled).
    #[error("storage unavailable")]
    Unavailable,
    /// The storage backend refused the operation.
    #[error("storage {op} failed for key {key:?}: {reason}")]
    Backend { op: &'static str, key: String, reason: String },
}
