//! # kindbite-client
//!
//! Leptos frontend for KindBite, a surplus-food marketplace. It has
//! pages, components, state reducers, the scripted chat responder, and the
//! static data tables behind the impact and partners views.
//!
//! The crate compiles for server rendering (`ssr`) and for the browser
//! (`hydrate`). All behavior lives in plain structs so it can be unit
//! tested without a DOM.

pub mod app;
pub mod components;
pub mod data;
pub mod pages;
pub mod responder;
pub mod state;
pub mod types;
pub mod util;

/// WASM entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
