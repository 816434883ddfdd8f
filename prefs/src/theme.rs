//! Dark/light theme resolution and toggling.
//!
//! Reads the user's preference from an injected [`Storage`] (browser
//! `localStorage` in production) and marks the document root with a mutually
//! exclusive `dark` / `light` class. Toggle writes back to storage and swaps
//! the marker in place.
//!
//! TRADE-OFFS
//! ==========
//! Server rendering cannot see local storage or media queries, so the first
//! paint is always [`ThemeState::Unresolved`]. Components render a neutral
//! placeholder for that state and resolve once on the client.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::PrefsError;
use crate::store::{PreferenceService, Storage};

/// Local storage key holding `dark` or `light`.
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = PrefsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(PrefsError::InvalidTheme(other.to_owned())),
        }
    }
}

/// Theme as seen by a component: unknown until the first client evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeState {
    #[default]
    Unresolved,
    Resolved(Theme),
}

impl ThemeState {
    #[must_use]
    pub fn theme(self) -> Option<Theme> {
        match self {
            Self::Unresolved => None,
            Self::Resolved(theme) => Some(theme),
        }
    }

    #[must_use]
    pub fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

// =============================================================================
// ENVIRONMENT SEAMS
// =============================================================================

/// System-level color-scheme signal (`prefers-color-scheme`).
pub trait ColorScheme {
    fn prefers_dark(&self) -> bool;
}

/// The root presentation node carrying the theme marker.
pub trait RootMarker {
    /// Mark the root with `theme`, removing the opposite marker.
    fn mark(&self, theme: Theme);
}

impl<T: ColorScheme + ?Sized> ColorScheme for &T {
    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }
}

impl<T: RootMarker + ?Sized> RootMarker for &T {
    fn mark(&self, theme: Theme) {
        (**self).mark(theme);
    }
}

/// What to do with a theme derived from the system signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePersistence {
    /// Write the derived theme to storage, making it sticky.
    #[default]
    Persist,
    /// Leave storage empty so later loads follow the system signal again.
    FollowSystem,
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// Resolves and toggles the theme against injected storage, signal and root.
pub struct ThemeController<S, C, M> {
    prefs: PreferenceService<S, Theme>,
    scheme: C,
    root: M,
    persistence: ThemePersistence,
}

impl<S, C, M> ThemeController<S, C, M>
where
    S: Storage,
    C: ColorScheme,
    M: RootMarker,
{
    pub fn new(storage: S, scheme: C, root: M) -> Self {
        Self {
            prefs: PreferenceService::new(storage, THEME_KEY),
            scheme,
            root,
            persistence: ThemePersistence::default(),
        }
    }

    #[must_use]
    pub fn with_persistence(mut self, persistence: ThemePersistence) -> Self {
        self.persistence = persistence;
        self
    }

    /// First client-side evaluation: stored value, else system signal.
    pub fn resolve(&self) -> ThemeState {
        let theme = if let Some(stored) = self.prefs.read() {
            stored
        } else {
            let derived = if self.scheme.prefers_dark() { Theme::Dark } else { Theme::Light };
            if self.persistence == ThemePersistence::Persist {
                self.persist(derived);
            }
            derived
        };

        self.root.mark(theme);
        tracing::debug!(%theme, "theme resolved");
        ThemeState::Resolved(theme)
    }

    /// Flip a resolved theme, mark the root and store the explicit choice.
    ///
    /// An unresolved state has nothing to flip and is returned unchanged.
    pub fn toggle(&self, current: ThemeState) -> ThemeState {
        let ThemeState::Resolved(theme) = current else {
            return current;
        };
        let next = theme.flipped();
        self.root.mark(next);
        self.persist(next);
        ThemeState::Resolved(next)
    }

    fn persist(&self, theme: Theme) {
        if let Err(e) = self.prefs.write(theme) {
            tracing::warn!(%theme, error = %e, "theme preference not saved");
        }
    }
}
