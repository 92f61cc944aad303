//! Brightline - landing site
//!
//! Marketing site for a booking and invoicing tool for small businesses,
//! built with Leptos and WebAssembly. Features an orbiting 3D feature
//! carousel and a demo scheduling endpoint.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
