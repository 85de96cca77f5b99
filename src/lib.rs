// lib.rs - Root module for the fleet_console library
//
// The library is compiled twice by cargo-leptos: natively with `ssr` for the
// server binary, and to WASM with `hydrate` for the browser bundle.

#![recursion_limit = "256"]
/// Sample clients and cars shared by the test suites
pub mod fixtures;

pub mod web_app;

cfg_if::cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;

        /// Browser entry point: attach to the server-rendered HTML
        #[wasm_bindgen]
        pub fn hydrate() {
            console_error_panic_hook::set_once();
            leptos::mount::hydrate_body(web_app::App);
        }
    }
}
