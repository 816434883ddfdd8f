//! Local UI chrome state (theme, menus).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns in one context value so the header,
//! its mobile drawer and both theme toggles read the same theme.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use prefs::ThemeState;

/// UI state for the theme and the mobile navigation drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// `Unresolved` until the first client-side evaluation.
    pub theme: ThemeState,
    pub mobile_menu_open: bool,
}

impl UiState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}
