//! Server configuration parsed from environment variables.

use prefs::Locale;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("unsupported DEFAULT_LOCALE: {0:?}")]
    UnsupportedLocale(String),
    #[error("invalid COOKIE_SECURE: {0:?}")]
    InvalidBool(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Locale served when neither cookie nor `Accept-Language` resolves.
    pub default_locale: Locale,
    /// Mark the locale cookie `Secure`.
    pub cookie_secure: bool,
}

impl ServerConfig {
    /// Build typed config from environment-style variables read via `lookup`.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DEFAULT_LOCALE`: `pt` (default) or `en`
    /// - `COOKIE_SECURE`: `1/true/yes/on` or `0/false/no/off`, default off
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let default_locale = parse_default_locale(lookup("DEFAULT_LOCALE").as_deref())?;
        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidBool(raw))?,
            None => false,
        };

        Ok(Self { port, default_locale, cookie_secure })
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_default_locale(raw: Option<&str>) -> Result<Locale, ConfigError> {
    match raw {
        None => Ok(Locale::default()),
        Some(tag) => Locale::from_tag(tag).ok_or_else(|| ConfigError::UnsupportedLocale(tag.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
