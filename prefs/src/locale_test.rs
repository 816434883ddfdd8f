use super::*;
use crate::store::MemoryStorage;

// =============================================================================
// Locale
// =============================================================================

#[test]
fn default_locale_is_portuguese() {
    assert_eq!(Locale::default(), Locale::Pt);
}

#[test]
fn from_tag_accepts_supported_tags_case_insensitively() {
    assert_eq!(Locale::from_tag("pt"), Some(Locale::Pt));
    assert_eq!(Locale::from_tag("EN"), Some(Locale::En));
    assert_eq!(Locale::from_tag(" en "), Some(Locale::En));
}

#[test]
fn from_tag_rejects_unsupported_and_regional_tags() {
    assert_eq!(Locale::from_tag("fr"), None);
    assert_eq!(Locale::from_tag("en-US"), None);
    assert_eq!(Locale::from_tag(""), None);
}

#[test]
fn parse_error_names_the_tag() {
    let err = "de".parse::<Locale>().unwrap_err();
    assert_eq!(err, PrefsError::UnsupportedLocale("de".into()));
}

#[test]
fn display_and_serde_use_lowercase_tag() {
    assert_eq!(Locale::En.to_string(), "en");
    assert_eq!(serde_json::to_string(&Locale::Pt).unwrap(), "\"pt\"");
    assert_eq!(serde_json::from_str::<Locale>("\"en\"").unwrap(), Locale::En);
    assert!(serde_json::from_str::<Locale>("\"es\"").is_err());
}

#[test]
fn every_locale_has_display_metadata() {
    for locale in Locale::ALL {
        assert!(!locale.native_name().is_empty());
        assert!(!locale.flag().is_empty());
    }
}

// =============================================================================
// negotiate
// =============================================================================

#[test]
fn negotiate_uses_base_subtag_of_first_tag() {
    assert_eq!(negotiate("en-US,en;q=0.9,pt;q=0.8"), Some(Locale::En));
    assert_eq!(negotiate("pt-BR"), Some(Locale::Pt));
    assert_eq!(negotiate("pt_BR"), Some(Locale::Pt));
}

#[test]
fn negotiate_strips_quality_and_whitespace() {
    assert_eq!(negotiate(" en;q=0.8 , pt"), Some(Locale::En));
}

#[test]
fn negotiate_only_considers_first_tag() {
    assert_eq!(negotiate("fr-FR,en;q=0.9"), None);
}

#[test]
fn negotiate_rejects_malformed_headers() {
    assert_eq!(negotiate(""), None);
    assert_eq!(negotiate(",en"), None);
    assert_eq!(negotiate("*"), None);
}

// =============================================================================
// LocaleResolver
// =============================================================================

#[test]
fn persisted_supported_tag_round_trips() {
    let resolver = LocaleResolver::new(Locale::Pt);
    for locale in Locale::ALL {
        assert_eq!(resolver.resolve(Some(locale.as_str()), Some("fr")), locale);
    }
}

#[test]
fn persisted_value_wins_over_header() {
    let resolver = LocaleResolver::new(Locale::Pt);
    assert_eq!(resolver.resolve(Some("pt"), Some("en-US")), Locale::Pt);
}

#[test]
fn header_used_when_nothing_persisted() {
    let resolver = LocaleResolver::new(Locale::Pt);
    assert_eq!(resolver.resolve(None, Some("en-GB,en;q=0.9")), Locale::En);
    assert_eq!(resolver.resolve(Some(""), Some("en")), Locale::En);
}

#[test]
fn unsupported_or_absent_inputs_yield_default() {
    for default in Locale::ALL {
        let resolver = LocaleResolver::new(default);
        assert_eq!(resolver.resolve(None, None), default);
        assert_eq!(resolver.resolve(None, Some("de-DE")), default);
        assert_eq!(resolver.resolve(None, Some(";;;")), default);
        assert_eq!(resolver.resolve(Some("klingon"), None), default);
    }
}

#[test]
fn unsupported_persisted_value_skips_header() {
    let resolver = LocaleResolver::new(Locale::Pt);
    assert_eq!(resolver.resolve(Some("xx"), Some("en")), Locale::Pt);
}

#[test]
fn resolve_from_reads_locale_key_from_storage() {
    let resolver = LocaleResolver::new(Locale::Pt);
    let store = MemoryStorage::new().with(LOCALE_COOKIE, "en");
    assert_eq!(resolver.resolve_from(&store, Some("pt-BR")), Locale::En);

    let empty = MemoryStorage::new();
    assert_eq!(resolver.resolve_from(&empty, Some("en")), Locale::En);
    assert_eq!(resolver.resolve_from(&empty, None), Locale::Pt);
}

#[test]
fn change_then_resolve_yields_new_locale() {
    let resolver = LocaleResolver::new(Locale::Pt);
    let store = MemoryStorage::new();
    let prefs = crate::store::PreferenceService::new(&store, LOCALE_COOKIE);
    prefs.write(Locale::En).unwrap();
    assert_eq!(resolver.resolve_from(&store, None), Locale::En);
    prefs.write(Locale::En).unwrap();
    assert_eq!(resolver.resolve_from(&store, None), Locale::En);
}
