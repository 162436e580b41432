//! Admin console UI: the authenticated shell, its navigation, and the
//! routed views hosted inside it.
//!
//! ARCHITECTURE
//! ============
//! `state` holds plain data models, `net` talks to the host's REST API,
//! `components` render the shell chrome, and `pages` are the route-level
//! views. The same crate is compiled with `ssr` for server rendering and with
//! `hydrate` for the browser bundle.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(all(test, feature = "ssr"))]
mod test_support;

/// Browser entrypoint: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
