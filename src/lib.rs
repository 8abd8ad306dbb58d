//! Browser client for the Community Share matching platform.
//!
//! ARCHITECTURE
//! ============
//! `app` wires routing and shared context, `net` owns REST calls and the
//! authentication lifecycle, `state` holds session and flash-message state,
//! `pages` are the route-level screens, and `util` isolates browser glue
//! (cookies, panic reporting) behind the `browser` feature so the rest of
//! the crate compiles and tests natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and the panic reporter, then mount
/// the application to `<body>`.
#[cfg(feature = "browser")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    let _ = console_log::init_with_level(log::Level::Debug);
    util::error_report::install();
    leptos::mount::mount_to_body(app::App);
}
