//! Server-rendered page and embedded static assets.
//!
//! The page ships without a theme marker; the client resolves and applies
//! one during hydration, before styles keyed on the marker classes kick in.

use axum::http::header;
use axum::response::{Html, IntoResponse};
use dioxus::prelude::*;

use crate::app::App;

/// Stylesheet compiled into the binary; nothing to deploy next to it.
const STYLE_CSS: &str = include_str!("../../public/style.css");

/// HTML document wrapper around server-rendered body markup.
fn html_doc(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="stylesheet" href="/assets/style.css">
</head>
<body>
{body}
</body>
</html>"#
    )
}

/// GET / - the appearance page
pub async fn home_page() -> impl IntoResponse {
    let body = dioxus::ssr::render_element(rsx! { App {} });
    Html(html_doc("Appearance - nightswitch", &body))
}

/// GET /assets/style.css
pub async fn style_css() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        STYLE_CSS,
    )
}
