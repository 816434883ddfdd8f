//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the preference API and stitches it with Leptos SSR
//! rendering under a single Axum router. Every request passes through the
//! locale middleware first, so pages and handlers see the same resolved
//! locale.

pub mod locale;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::routing::{get, post};
use client::net::api::LOCALE_ENDPOINT;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON/health routes, without Leptos.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(LOCALE_ENDPOINT, post(locale::set_locale))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full site: API routes + Leptos SSR pages + static `/pkg` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing
/// `[workspace.metadata.leptos]` section or `LEPTOS_*` environment).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    Ok(site_router(state, conf.leptos_options))
}

/// Assemble the site for explicit Leptos options.
pub fn site_router(state: AppState, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let catalog = Arc::clone(&state.catalog);
    let default_locale = state.resolver.default_locale();

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || locale::provide_request_i18n(&catalog, default_locale),
            {
                let opts = leptos_options.clone();
                move || client::app::shell(opts.clone())
            },
        )
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    api_routes(state.clone())
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(site_root))
        .layer(middleware::from_fn_with_state(state, locale::attach_locale))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
