use super::*;

#[test]
fn root_is_only_active_on_root() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/about", "/"));
}

#[test]
fn trailing_slash_is_ignored() {
    assert!(is_active("/projects/", "/projects"));
    assert!(!is_active("/projects/abc", "/projects"));
}

#[test]
fn nav_items_cover_every_route_once() {
    let hrefs: Vec<_> = NAV_ITEMS.iter().map(|(_, href)| *href).collect();
    assert_eq!(hrefs, vec!["/", "/about", "/projects", "/contact"]);
}

#[test]
fn nav_items_have_translations() {
    let i18n = crate::state::i18n::I18n::embedded(prefs::Locale::En);
    for (key, _) in NAV_ITEMS {
        assert_ne!(i18n.t(key), key);
    }
}

#[test]
fn nav_class_marks_active_link() {
    assert!(nav_class(true).contains("--active"));
    assert!(!nav_class(false).contains("--active"));
}
