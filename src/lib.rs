//! # prezent-widgets
//!
//! Leptos + WASM widgets for the Prezent.Energy marketing site: the floating
//! chat assistant, the news & regulatory query panel, the demo-request lead
//! form, and the FAQ accordion.
//!
//! Widget state and wire types are plain Rust (`state`, `net`) and are tested
//! natively. Browser glue sits behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: install logging, read endpoints, mount widgets.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    let config = config::EndpointConfig::from_window();
    log::debug!("endpoints: {config:?}");
    app::mount_widgets(&config);
}
