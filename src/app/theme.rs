//! Theme context with localStorage persistence.
//!
//! Installs a [`ThemeContext`] at the app root. On the client the real
//! browser environment backs the controller: the override lives in
//! localStorage under the `dark-mode` key, the marker classes go on
//! `document.body`, and the system preference comes from the
//! `prefers-color-scheme` media query.

use dioxus::prelude::*;

use crate::theme::Theme;

/// Global theme state shared via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub active: Signal<Theme>,
}

impl ThemeContext {
    /// Theme currently applied.
    pub fn get(&self) -> Theme {
        (self.active)()
    }

    /// Flip the theme and persist the new choice.
    pub fn toggle(&self) {
        let mut active = self.active;

        #[cfg(target_arch = "wasm32")]
        {
            if let Some(mut controller) = browser_controller() {
                active.set(controller.toggle());
                return;
            }
        }

        // Rendering without a browser: keep the signal coherent anyway.
        let next = active.peek().flipped();
        active.set(next);
    }
}

/// Initialize theme context provider - call once at app root
pub fn use_theme_provider() {
    let active = use_signal(Theme::default);
    use_context_provider(|| ThemeContext { active });

    // Client-side only: resolve stored override + media query, mark the body.
    #[cfg(target_arch = "wasm32")]
    {
        let mut active = active;
        use_effect(move || {
            if let Some(mut controller) = browser_controller() {
                active.set(controller.init(system_prefers_dark()));
            }
        });
    }
}

/// Get theme context - use in any component
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

// ============ WASM-only helpers ============

#[cfg(target_arch = "wasm32")]
use crate::theme::{StoreError, ThemeController, ThemeRoot, ThemeStore, STORAGE_KEY};

/// The localStorage slot holding the override ("true" / "false").
#[cfg(target_arch = "wasm32")]
struct BrowserStore {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl ThemeStore for BrowserStore {
    fn load(&self) -> Option<bool> {
        match self.storage.get_item(STORAGE_KEY) {
            Ok(Some(value)) => Some(value == "true"),
            _ => None,
        }
    }

    fn save(&mut self, dark: bool) -> Result<(), StoreError> {
        let value = if dark { "true" } else { "false" };
        self.storage
            .set_item(STORAGE_KEY, value)
            .map_err(|_| StoreError("localStorage write failed".into()))
    }
}

/// Class list of `document.body`.
#[cfg(target_arch = "wasm32")]
struct BrowserRoot {
    classes: web_sys::DomTokenList,
}

#[cfg(target_arch = "wasm32")]
impl ThemeRoot for BrowserRoot {
    fn has_marker(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    fn add_marker(&mut self, class: &str) {
        let _ = self.classes.add_1(class);
    }

    fn remove_marker(&mut self, class: &str) {
        let _ = self.classes.remove_1(class);
    }
}

/// Controller over the live page, or `None` outside a browser (or when
/// localStorage is unavailable).
#[cfg(target_arch = "wasm32")]
fn browser_controller() -> Option<ThemeController<BrowserStore, BrowserRoot>> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok().flatten()?;
    let body = window.document()?.body()?;
    Some(ThemeController::new(
        BrowserStore { storage },
        BrowserRoot {
            classes: body.class_list(),
        },
    ))
}

#[cfg(target_arch = "wasm32")]
fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| {
            window
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
        })
        .map(|query| query.matches())
        .unwrap_or(false)
}
