//! Portfolio page behavior, compiled to WebAssembly.
//!
//! Smooth fragment scrolling, scroll chrome, the mobile menu, the contact
//! form relay, scroll reveals, hero parallax, active-section highlighting and
//! the project preview modal. Each feature lives in its own module and binds
//! independently; a page missing a feature's markup simply goes without it.

pub mod anchors;
pub mod chrome;
pub mod config;
pub mod contact;
pub mod dom;
pub mod events;
pub mod highlight;
pub mod menu;
pub mod modal;
pub mod notify;
pub mod page;
pub mod parallax;
pub mod relay;
pub mod reveal;
pub mod state;
pub mod tags;

use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    page::print_banner();
    dom::when_ready(init)
}

/// Load config, resolve elements and bind every feature.
pub fn init() {
    state::install(config::load());
    let config = state::config();
    let els = dom::Elements::bind(&config);
    events::bind_events(&els);
    tracing::info!("portfolio behavior ready");
}
