use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, ServerConfig { port: DEFAULT_PORT, default_locale: Locale::Pt, cookie_secure: false });
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg =
        ServerConfig::from_lookup(lookup(&[("PORT", "8080"), ("DEFAULT_LOCALE", "EN"), ("COOKIE_SECURE", "yes")]))
            .unwrap();
    assert_eq!(cfg, ServerConfig { port: 8080, default_locale: Locale::En, cookie_secure: true });
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".into()));
}

#[test]
fn from_lookup_rejects_unsupported_default_locale() {
    let err = ServerConfig::from_lookup(lookup(&[("DEFAULT_LOCALE", "pt-BR")])).unwrap_err();
    assert!(err.to_string().contains("unsupported DEFAULT_LOCALE"));
}

#[test]
fn from_lookup_rejects_bad_bool() {
    let err = ServerConfig::from_lookup(lookup(&[("COOKIE_SECURE", "maybe")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBool("maybe".into()));
}

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  true  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "FALSE"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool(""), None);
    assert_eq!(parse_bool("maybe"), None);
}
