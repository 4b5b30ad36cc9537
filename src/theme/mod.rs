//! Dark/light theme selection with a persisted user override.
//!
//! The controller resolves the active theme once per page load from the
//! operating system's color-scheme preference and an optional stored
//! override, applies it as a marker class on the page root, and flips it on
//! demand. The persistent store and the page root are injected, so the whole
//! behavior runs (and is tested) without a browser. See [`memory`] for the
//! in-memory doubles.

mod controller;
pub mod memory;

pub use controller::ThemeController;

use thiserror::Error;

/// Persistent-store key holding the user override ("true" / "false").
pub const STORAGE_KEY: &str = "dark-mode";

/// Marker class present on the page root while the dark theme is active.
pub const DARK_CLASS: &str = "dark-mode";

/// Marker class present on the page root while the light theme is active.
pub const LIGHT_CLASS: &str = "light-mode";

/// Class identifying the click target that flips the theme.
pub const TOGGLE_CLASS: &str = "dark-mode-toggle";

/// Theme options
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

impl Theme {
    /// Theme for a "prefers dark" flag, as read from the media query or the
    /// stored override.
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    /// The other theme.
    pub fn flipped(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    /// Marker class this theme puts on the page root.
    pub fn css_class(self) -> &'static str {
        match self {
            Theme::Dark => DARK_CLASS,
            Theme::Light => LIGHT_CLASS,
        }
    }
}

/// Persistent store for the user's explicit theme choice.
///
/// Three states: no override recorded, dark (`true`), light (`false`).
pub trait ThemeStore {
    /// Current override, or `None` when the user never chose explicitly.
    fn load(&self) -> Option<bool>;

    /// Record the override. Callers treat failure as non-fatal: the marker
    /// still changes, the choice just won't survive a reload.
    fn save(&mut self, dark: bool) -> Result<(), StoreError>;
}

/// Marker-class surface of the page root.
pub trait ThemeRoot {
    fn has_marker(&self, class: &str) -> bool;
    fn add_marker(&mut self, class: &str);
    fn remove_marker(&mut self, class: &str);
}

/// Failure to persist the theme override.
#[derive(Debug, Error)]
#[error("theme store rejected the write: {0}")]
pub struct StoreError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_dark_maps_flag_to_theme() {
        assert_eq!(Theme::from_dark(true), Theme::Dark);
        assert_eq!(Theme::from_dark(false), Theme::Light);
        assert!(Theme::from_dark(true).is_dark());
        assert!(!Theme::from_dark(false).is_dark());
    }

    #[test]
    fn flipping_twice_is_identity() {
        for theme in [Theme::Dark, Theme::Light] {
            assert_eq!(theme.flipped().flipped(), theme);
            assert_ne!(theme.flipped(), theme);
        }
    }

    #[test]
    fn css_classes_match_marker_constants() {
        assert_eq!(Theme::Dark.css_class(), DARK_CLASS);
        assert_eq!(Theme::Light.css_class(), LIGHT_CLASS);
    }
}
