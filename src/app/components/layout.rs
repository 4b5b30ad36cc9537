//! Page chrome shared by every page.

use dioxus::prelude::*;

use super::toggle::DarkModeToggle;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page heading (also shown in the header bar)
    pub title: String,
    /// Page content
    pub children: Element,
}

/// Header with the theme toggle, main content area, version footer.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("NIGHTSWITCH_VERSION");

    rsx! {
        header { class: "page-header",
            h1 { "{props.title}" }
            DarkModeToggle {}
        }
        main { class: "page-main",
            {props.children}
        }
        footer { class: "page-footer",
            small { "nightswitch v{version}" }
        }
    }
}
