//! Locale resolution middleware and the locale preference endpoint.
//!
//! The persisted preference is the `locale` cookie. It is read on every
//! request through [`CookieStorage`], resolved with the configured default,
//! and attached to the request as a `Locale` extension that the Leptos
//! context hook picks up. `POST /api/locale` is the only writer.

use std::cell::RefCell;

use axum::Json;
use axum::extract::{Request, State};
use axum::http::header::ACCEPT_LANGUAGE;
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use client::net::api::SetLocaleRequest;
use client::state::i18n::I18n;
use leptos::prelude::{provide_context, use_context};
use prefs::{Catalog, LOCALE_COOKIE, Locale, LocaleResolver, PreferenceService, PrefsError, Storage};
use time::Duration;

/// How long a chosen locale is remembered.
const LOCALE_COOKIE_MAX_AGE: Duration = Duration::days(365);

// =============================================================================
// COOKIE STORAGE
// =============================================================================

/// [`Storage`] over a request's cookies; writes accumulate into the jar
/// returned with the response.
pub struct CookieStorage {
    jar: RefCell<CookieJar>,
    secure: bool,
}

impl CookieStorage {
    pub fn new(jar: CookieJar, secure: bool) -> Self {
        Self { jar: RefCell::new(jar), secure }
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self::new(CookieJar::from_headers(headers), false)
    }

    pub fn into_jar(self) -> CookieJar {
        self.jar.into_inner()
    }
}

impl Storage for CookieStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.jar.borrow().get(key).map(|c| c.value().to_owned()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PrefsError> {
        // Readable by scripts: the locale is client-visible by contract.
        let cookie = Cookie::build((key.to_owned(), value.to_owned()))
            .path("/")
            .http_only(false)
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .max_age(LOCALE_COOKIE_MAX_AGE);
        let mut jar = self.jar.borrow_mut();
        *jar = std::mem::take(&mut *jar).add(cookie);
        Ok(())
    }
}

// =============================================================================
// RESOLUTION
// =============================================================================

/// Resolve the locale for a request from its cookie and `Accept-Language`.
pub fn request_locale(resolver: &LocaleResolver, headers: &HeaderMap) -> Locale {
    let store = CookieStorage::from_headers(headers);
    let accept_language = headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok());
    resolver.resolve_from(&store, accept_language)
}

/// Middleware: attach the resolved [`Locale`] as a request extension.
pub async fn attach_locale(State(state): State<crate::state::AppState>, mut req: Request, next: Next) -> Response {
    let locale = request_locale(&state.resolver, req.headers());
    tracing::debug!(%locale, path = %req.uri().path(), "locale resolved");
    req.extensions_mut().insert(locale);
    next.run(req).await
}

/// Leptos context hook: provide the request's [`I18n`] to the app.
///
/// Runs inside the render owner, where `leptos_axum` has already provided
/// the request `Parts`.
pub fn provide_request_i18n(catalog: &Catalog, default_locale: Locale) {
    let locale = use_context::<Parts>()
        .and_then(|parts| parts.extensions.get::<Locale>().copied())
        .unwrap_or(default_locale);
    provide_context(I18n::new(locale, catalog.bundle(locale)));
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `POST /api/locale` — persist the chosen locale as a cookie.
///
/// The body is typed, so unsupported tags are rejected by the extractor
/// before reaching here. The client reloads after a successful response.
pub async fn set_locale(
    State(state): State<crate::state::AppState>,
    jar: CookieJar,
    Json(body): Json<SetLocaleRequest>,
) -> Response {
    let store = CookieStorage::new(jar, state.cookie_secure);
    if let Err(e) = PreferenceService::new(&store, LOCALE_COOKIE).write(body.locale) {
        tracing::error!(error = %e, "locale cookie write failed");
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    tracing::info!(locale = %body.locale, "locale preference updated");
    (store.into_jar(), StatusCode::NO_CONTENT).into_response()
}

#[cfg(test)]
#[path = "locale_test.rs"]
mod locale_test;
