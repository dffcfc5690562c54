//! # management-ui
//!
//! Leptos + WASM shell for the hotel management console.
//!
//! The crate renders a navigation menu and the routed console pages while a
//! JWT session is valid, and a login form otherwise. Session validity is
//! owned by the session gate in [`state::session`], which polls the
//! management GraphQL endpoint on a fixed interval.
//!
//! Build with `csr` for a static single-page bundle, or with `hydrate` (and
//! `ssr` on the host) when a Leptos server renders [`app::shell`] first.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

#[cfg(any(feature = "csr", feature = "hydrate"))]
fn init_browser_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Static-bundle entry point: mounts the console into an empty `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    init_browser_logging();
    leptos::mount::mount_to_body(app::App);
}

/// SSR entry point: hydrates the document rendered by [`app::shell`].
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    init_browser_logging();
    leptos::mount::hydrate_body(app::App);
}
