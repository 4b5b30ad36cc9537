//! In-memory store and page-root doubles.
//!
//! Back the test suite; also usable anywhere the controller runs without a
//! browser.

use std::collections::BTreeSet;

use super::{StoreError, ThemeRoot, ThemeStore};

/// Stand-in for the browser's persistent key-value slot.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Option<bool>,
    reject_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds an override.
    pub fn with_override(dark: bool) -> Self {
        Self {
            value: Some(dark),
            ..Self::default()
        }
    }

    /// Store whose writes always fail, for exercising degraded persistence.
    pub fn rejecting_writes() -> Self {
        Self {
            reject_writes: true,
            ..Self::default()
        }
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Option<bool> {
        self.value
    }

    fn save(&mut self, dark: bool) -> Result<(), StoreError> {
        if self.reject_writes {
            return Err(StoreError("writes disabled".into()));
        }
        self.value = Some(dark);
        Ok(())
    }
}

/// Class-list stand-in for the page root.
#[derive(Debug, Default)]
pub struct MemoryRoot {
    classes: BTreeSet<String>,
}

impl MemoryRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root that already carries the given classes, e.g. leftovers from a
    /// previous render.
    pub fn with_classes(classes: &[&str]) -> Self {
        Self {
            classes: classes.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl ThemeRoot for MemoryRoot {
    fn has_marker(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn add_marker(&mut self, class: &str) {
        self.classes.insert(class.to_string());
    }

    fn remove_marker(&mut self, class: &str) {
        self.classes.remove(class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_round_trips_override() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load(), None);
        store.save(true).unwrap();
        assert_eq!(store.load(), Some(true));
        store.save(false).unwrap();
        assert_eq!(store.load(), Some(false));
    }

    #[test]
    fn rejecting_store_keeps_previous_value() {
        let mut store = MemoryStore::rejecting_writes();
        assert!(store.save(true).is_err());
        assert_eq!(store.load(), None);
    }

    #[test]
    fn root_tracks_markers_independently() {
        let mut root = MemoryRoot::with_classes(&["container"]);
        root.add_marker("dark-mode");
        assert!(root.has_marker("dark-mode"));
        assert!(root.has_marker("container"));
        root.remove_marker("dark-mode");
        assert!(!root.has_marker("dark-mode"));
        assert!(root.has_marker("container"));
    }
}
