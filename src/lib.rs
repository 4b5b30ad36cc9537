//! nightswitch - system-aware dark mode with a persisted override.
//!
//! This library provides:
//! - A platform-independent theme controller: resolve dark/light once per
//!   page load from the system preference and a stored override, mark the
//!   page root, flip and persist on demand
//! - A Dioxus web UI (theme context, toggle button, appearance page) backed
//!   by localStorage and `document.body` in the browser
//! - An axum server shell that renders the page and serves its stylesheet

#[cfg(feature = "server")]
pub mod api;
pub mod app;
#[cfg(feature = "server")]
pub mod config;
pub mod theme;
#[cfg(feature = "server")]
pub mod ui;
