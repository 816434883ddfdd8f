use super::*;

fn keys(value: &Value, prefix: &str, out: &mut Vec<String>) {
    if let Value::Object(map) = value {
        for (k, v) in map {
            let path = if prefix.is_empty() { k.clone() } else { format!("{prefix}.{k}") };
            keys(v, &path, out);
        }
    } else {
        out.push(prefix.to_owned());
    }
}

#[test]
fn embedded_bundles_parse() {
    for locale in Locale::ALL {
        assert!(Messages::embedded(locale).is_ok(), "{locale} bundle failed to parse");
    }
}

#[test]
fn bundles_share_the_same_key_set() {
    let mut pt = Vec::new();
    let mut en = Vec::new();
    keys(&Messages::embedded(Locale::Pt).unwrap().root, "", &mut pt);
    keys(&Messages::embedded(Locale::En).unwrap().root, "", &mut en);
    pt.sort();
    en.sort();
    assert_eq!(pt, en);
}

#[test]
fn text_resolves_dotted_paths() {
    let messages = Messages::embedded(Locale::En).unwrap();
    assert_eq!(messages.text("navigation.home"), "Home");
    assert_eq!(messages.text("contact.form.send"), "Send");
}

#[test]
fn text_differs_between_locales() {
    let catalog = Catalog::embedded().unwrap();
    assert_eq!(catalog.bundle(Locale::Pt).text("navigation.about"), "Sobre");
    assert_eq!(catalog.bundle(Locale::En).text("navigation.about"), "About");
}

#[test]
fn missing_text_falls_back_to_key() {
    let messages = Messages::embedded(Locale::Pt).unwrap();
    assert_eq!(messages.text("nope.missing"), "nope.missing");
    // Namespaces are not strings either.
    assert_eq!(messages.text("navigation"), "navigation");
    assert_eq!(Messages::empty().text("home.name"), "home.name");
}

#[test]
fn items_decode_typed_records() {
    let messages = Messages::embedded(Locale::En).unwrap();
    let education: Vec<EducationItem> = messages.items("about.education.items");
    assert!(!education.is_empty());
    let projects: Vec<Project> = messages.items("projects.items");
    assert!(projects.iter().all(|p| !p.readme.features.is_empty()));
    let techs: Vec<String> = messages.items("home.technologies");
    assert!(techs.contains(&"Java".to_owned()));
}

#[test]
fn items_with_wrong_shape_yield_empty() {
    let messages = Messages::embedded(Locale::En).unwrap();
    let wrong: Vec<Course> = messages.items("about.education.items");
    assert!(wrong.is_empty());
    let missing: Vec<Course> = messages.items("about.nothing");
    assert!(missing.is_empty());
}

#[test]
fn from_json_rejects_non_objects() {
    assert!(matches!(Messages::from_json(Locale::En, "[]"), Err(MessagesError::NotObject { .. })));
    assert!(matches!(Messages::from_json(Locale::En, "{"), Err(MessagesError::Parse { .. })));
}

#[test]
fn catalog_bundles_are_shared() {
    let catalog = Catalog::embedded().unwrap();
    let a = catalog.bundle(Locale::Pt);
    let b = catalog.bundle(Locale::Pt);
    assert!(Arc::ptr_eq(&a, &b));
}
