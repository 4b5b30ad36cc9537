//! Startup resolution and manual toggling of the active theme.

use super::{Theme, ThemeRoot, ThemeStore, DARK_CLASS, LIGHT_CLASS};

/// Keeps the page root's marker classes and the persisted override in sync.
///
/// Generic over the store and the root so the same logic drives the real
/// browser environment and the in-memory doubles used by tests.
pub struct ThemeController<S, R> {
    store: S,
    root: R,
}

impl<S: ThemeStore, R: ThemeRoot> ThemeController<S, R> {
    pub fn new(store: S, root: R) -> Self {
        Self { store, root }
    }

    /// Resolve the startup theme and mark the root accordingly.
    ///
    /// A stored override wins over the system preference. Afterwards exactly
    /// one of the two marker classes is present on the root.
    pub fn init(&mut self, system_prefers_dark: bool) -> Theme {
        let stored = self.store.load();
        tracing::debug!(system_prefers_dark, ?stored, "resolving startup theme");

        let theme = Theme::from_dark(stored.unwrap_or(system_prefers_dark));
        self.apply(theme);
        tracing::debug!(theme = theme.as_str(), "startup theme applied");
        theme
    }

    /// Flip the theme based on the root's current marker and persist the
    /// new choice, so the next load reproduces it regardless of the system
    /// preference.
    pub fn toggle(&mut self) -> Theme {
        // Mirrors the click behavior: dark marker present -> go light,
        // anything else -> go dark.
        let next = if self.root.has_marker(DARK_CLASS) {
            Theme::Light
        } else {
            Theme::Dark
        };
        self.apply(next);

        if let Err(err) = self.store.save(next.is_dark()) {
            tracing::warn!(%err, "theme override not persisted; choice won't survive a reload");
        }
        tracing::debug!(theme = next.as_str(), "theme toggled");
        next
    }

    /// Theme currently marked on the root, if any.
    pub fn active(&self) -> Option<Theme> {
        if self.root.has_marker(DARK_CLASS) {
            Some(Theme::Dark)
        } else if self.root.has_marker(LIGHT_CLASS) {
            Some(Theme::Light)
        } else {
            None
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    /// Swap markers: drop the counterpart first so the root never carries
    /// both classes at once.
    fn apply(&mut self, theme: Theme) {
        self.root.remove_marker(theme.flipped().css_class());
        self.root.add_marker(theme.css_class());
    }
}
