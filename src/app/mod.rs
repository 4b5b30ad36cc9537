//! Dioxus application: theme provider plus the single page.

use dioxus::prelude::*;

pub mod components;
pub mod pages;
pub mod theme;

use pages::Home;
use theme::use_theme_provider;

/// Root app component
#[component]
pub fn App() -> Element {
    // Theme context at the app root (handles localStorage + body marker)
    use_theme_provider();

    rsx! {
        Home {}
    }
}
