use prefs::Catalog;
use prefs::messages::Course;

use super::*;

#[test]
fn embedded_translates_per_locale() {
    assert_eq!(I18n::embedded(Locale::En).t("navigation.contact"), "Contact");
    assert_eq!(I18n::embedded(Locale::Pt).t("navigation.contact"), "Contato");
}

#[test]
fn fallback_outside_browser_uses_default_locale() {
    assert_eq!(I18n::fallback().locale(), Locale::default());
}

#[test]
fn new_shares_catalog_bundle() {
    let catalog = Catalog::embedded().unwrap();
    let i18n = I18n::new(Locale::En, catalog.bundle(Locale::En));
    assert_eq!(i18n.locale(), Locale::En);
    let courses: Vec<Course> = i18n.items("about.courses.items");
    assert!(!courses.is_empty());
}

#[test]
fn use_i18n_without_context_falls_back() {
    let owner = Owner::new();
    owner.with(|| {
        assert_eq!(use_i18n().locale(), Locale::default());
        provide_context(I18n::embedded(Locale::En));
        assert_eq!(use_i18n().locale(), Locale::En);
    });
}
