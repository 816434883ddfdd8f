//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers and middleware via the `State`
//! extractor. Everything in it is immutable after startup: the parsed message
//! catalog, the locale resolver carrying the configured default, and cookie
//! settings. Nothing per-user lives on the server.

use std::sync::Arc;

use prefs::{Catalog, LocaleResolver};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub resolver: LocaleResolver,
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: Catalog, config: &ServerConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            resolver: LocaleResolver::new(config.default_locale),
            cookie_secure: config.cookie_secure,
        }
    }
}
