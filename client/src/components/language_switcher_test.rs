use super::*;

#[test]
fn press_outside_open_menu_dismisses() {
    assert!(dismisses_menu(true, false));
}

#[test]
fn press_inside_open_menu_keeps_it() {
    assert!(!dismisses_menu(true, true));
}

#[test]
fn closed_menu_ignores_presses() {
    assert!(!dismisses_menu(false, false));
    assert!(!dismisses_menu(false, true));
}
