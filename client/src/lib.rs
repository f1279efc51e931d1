//! # client
//!
//! Leptos + WASM frontend for the StockFlow warehouse management system.
//!
//! This crate contains the pages (login, admin floor-plan editor, role
//! dashboards), application state, the session guard, network helpers, and
//! layout persistence. It integrates with the `canvas` crate for the
//! imperative floor-plan editor via the `CanvasHost` bridge component.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("stockflow client starting");
    leptos::mount::hydrate_body(app::App);
}
