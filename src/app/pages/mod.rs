//! Page components.

use dioxus::prelude::*;

use crate::app::components::Layout;
use crate::app::theme::use_theme;

/// The appearance page: shows the active theme and hosts the toggle.
#[component]
pub fn Home() -> Element {
    let theme = use_theme();
    let active = theme.get().label();

    rsx! {
        Layout {
            title: "Appearance".to_string(),

            p { class: "theme-readout",
                "Active theme: "
                strong { "{active}" }
            }
            p { class: "theme-hint",
                "Flipping the switch stores your choice in this browser; it wins "
                "over the system preference on the next visit."
            }
        }
    }
}
