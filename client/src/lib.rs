//! # client
//!
//! Leptos + WASM front end for the periodic table editor: a filterable
//! element table with an edit dialog.
//!
//! `state` holds the framework-free table, filter, and edit-session logic;
//! `components` and `pages` bind it to the DOM; `app` provides the shell the
//! server renders and the browser hydrates.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;

/// WASM entry point: install panic + log hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::error!("console logger init failed: {err}");
    }
    leptos::mount::hydrate_body(app::App);
}
