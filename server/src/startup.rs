//! Process startup: config, content, router, listener.
//!
//! Every step returns [`StartupError`] so `main` logs one error line and
//! exits instead of panicking.

#[cfg(test)]
#[path = "startup_test.rs"]
mod startup_test;

use prefs::{Catalog, MessagesError};

use crate::config::{ConfigError, ServerConfig};
use crate::routes;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("message bundles: {0}")]
    Messages(#[from] MessagesError),
    #[error("{0}")]
    Leptos(String),
    #[error("failed to bind port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}

/// Build everything from `lookup` and serve until the listener stops.
///
/// # Errors
///
/// Returns the first step that fails.
pub async fn run(lookup: impl Fn(&str) -> Option<String>) -> Result<(), StartupError> {
    let config = ServerConfig::from_lookup(lookup)?;
    let catalog = Catalog::embedded()?;
    let state = AppState::new(catalog, &config);

    let app = routes::leptos_app(state).map_err(StartupError::Leptos)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(|source| StartupError::Bind { port: config.port, source })?;

    tracing::info!(port = config.port, default_locale = %config.default_locale, "portfolio listening");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
