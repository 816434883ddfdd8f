use super::*;
use crate::locale::{LOCALE_COOKIE, Locale};
use crate::theme::{THEME_KEY, Theme};

// =============================================================================
// MemoryStorage
// =============================================================================

#[test]
fn memory_storage_starts_empty() {
    let store = MemoryStorage::new();
    assert_eq!(store.get("anything").unwrap(), None);
}

#[test]
fn memory_storage_set_then_get() {
    let store = MemoryStorage::new();
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn memory_storage_read_only_rejects_writes_but_keeps_seed() {
    let store = MemoryStorage::new().with("k", "seed").read_only();
    let err = store.set("k", "other").unwrap_err();
    assert!(matches!(err, PrefsError::Backend { op: "set", .. }));
    assert_eq!(store.value("k").as_deref(), Some("seed"));
}

#[test]
fn storage_is_usable_through_a_reference() {
    let store = MemoryStorage::new();
    let by_ref: &MemoryStorage = &store;
    Storage::set(&by_ref, "k", "v").unwrap();
    assert_eq!(store.value("k").as_deref(), Some("v"));
}

// =============================================================================
// PreferenceService
// =============================================================================

#[test]
fn read_returns_none_when_absent() {
    let store = MemoryStorage::new();
    let prefs: PreferenceService<_, Theme> = PreferenceService::new(&store, THEME_KEY);
    assert_eq!(prefs.read(), None);
}

#[test]
fn write_then_read_returns_same_value() {
    let store = MemoryStorage::new();
    let prefs = PreferenceService::new(&store, LOCALE_COOKIE);
    for locale in Locale::ALL {
        prefs.write(locale).unwrap();
        assert_eq!(prefs.read(), Some(locale));
    }
    assert_eq!(store.value(LOCALE_COOKIE).as_deref(), Some("en"));
}

#[test]
fn unparsable_value_reads_as_none_but_raw_is_kept() {
    let store = MemoryStorage::new().with(THEME_KEY, "sepia");
    let prefs: PreferenceService<_, Theme> = PreferenceService::new(&store, THEME_KEY);
    assert_eq!(prefs.read(), None);
    assert_eq!(prefs.read_raw().as_deref(), Some("sepia"));
}

#[test]
fn write_propagates_backend_error() {
    let store = MemoryStorage::new().read_only();
    let prefs = PreferenceService::new(&store, THEME_KEY);
    assert!(prefs.write(Theme::Dark).is_err());
    assert_eq!(prefs.key(), THEME_KEY);
}

struct BrokenStorage;

impl Storage for BrokenStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, PrefsError> {
        Err(PrefsError::Unavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), PrefsError> {
        Err(PrefsError::Unavailable)
    }
}

#[test]
fn read_folds_backend_errors_into_none() {
    let prefs: PreferenceService<_, Theme> = PreferenceService::new(BrokenStorage, THEME_KEY);
    assert_eq!(prefs.read(), None);
    assert_eq!(prefs.write(Theme::Light), Err(PrefsError::Unavailable));
}
