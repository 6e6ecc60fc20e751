//! Portfolio site front-end.
//!
//! SYSTEM CONTEXT
//! ==============
//! A Leptos client crate owning theme resolution/persistence, the interface
//! string dictionary, and the static content collections. The `hydrate`
//! feature gates every browser dependency; `ssr` builds render the same
//! tree deterministically with all environment access compiled to no-ops.

pub mod app;
pub mod components;
pub mod content;
pub mod i18n;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: set up panic reporting and logging, then hydrate the
/// server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
