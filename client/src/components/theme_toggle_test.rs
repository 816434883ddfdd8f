use super::*;

#[test]
fn unresolved_renders_no_icon() {
    assert_eq!(icon(ThemeState::Unresolved), "");
}

#[test]
fn resolved_states_render_distinct_icons() {
    let dark = icon(ThemeState::Resolved(Theme::Dark));
    let light = icon(ThemeState::Resolved(Theme::Light));
    assert!(!dark.is_empty());
    assert!(!light.is_empty());
    assert_ne!(dark, light);
}

#[test]
fn label_describes_the_next_theme() {
    assert_eq!(label_key(ThemeState::Resolved(Theme::Dark)), "theme.toLight");
    assert_eq!(label_key(ThemeState::Resolved(Theme::Light)), "theme.toDark");
    assert_eq!(label_key(ThemeState::Unresolved), "theme.toggle");
}

#[test]
fn pending_class_keeps_base_footprint() {
    assert!(class(ThemeState::Unresolved).starts_with("theme-toggle "));
    assert!(class(ThemeState::Unresolved).contains("--pending"));
    assert!(!class(ThemeState::Resolved(Theme::Dark)).contains("--pending"));
}
