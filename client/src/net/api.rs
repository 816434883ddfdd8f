//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed preference
//! write leaves the page usable in its current locale.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use prefs::Locale;
use serde::{Deserialize, Serialize};

/// Endpoint that persists the locale cookie.
pub const LOCALE_ENDPOINT: &str = "/api/locale";

/// Body of `POST /api/locale`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetLocaleRequest {
    pub locale: Locale,
}

#[cfg(any(test, feature = "hydrate"))]
fn set_locale_failed_message(status: u16) -> String {
    format!("set locale failed: {status}")
}

/// Persist `locale` as the preferred locale via `POST /api/locale`.
///
/// Resolves once the server has answered, so a reload issued afterwards
/// already carries the new cookie.
///
/// # Errors
///
/// Returns an error string if the request fails or is rejected.
pub async fn set_locale(locale: Locale) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(LOCALE_ENDPOINT)
            .json(&SetLocaleRequest { locale })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(set_locale_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locale;
        Err("not available on server".to_owned())
    }
}
