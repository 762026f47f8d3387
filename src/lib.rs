// lib.rs - Root module for the aclon_site library
//
// The library is built twice by cargo-leptos: once for the actix server
// binary (`ssr`) and once as the WASM bundle that hydrates the rendered
// pages (`hydrate`). Without either feature only the data, catalog, theme
// and form logic compile, which is what the plain unit tests exercise.

/// Static catalog tables and site copy
pub mod data;

/// Leptos application, components and the logic behind them
pub mod web_app;

/// WASM entry point, called by the script that cargo-leptos injects
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(web_app::App);
}
