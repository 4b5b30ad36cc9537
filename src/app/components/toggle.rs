//! The button that flips between dark and light mode.

use dioxus::prelude::*;

use crate::app::theme::use_theme;
use crate::theme::{Theme, TOGGLE_CLASS};

/// Manual theme toggle, identified by the conventional `dark-mode-toggle`
/// class.
#[component]
pub fn DarkModeToggle() -> Element {
    let theme = use_theme();

    let (icon, label) = match theme.get() {
        Theme::Dark => ("☀️", "Switch to light mode"),
        Theme::Light => ("🌙", "Switch to dark mode"),
    };

    rsx! {
        button {
            class: TOGGLE_CLASS,
            aria_label: label,
            title: label,
            onclick: move |_| theme.toggle(),
            "{icon}"
        }
    }
}
