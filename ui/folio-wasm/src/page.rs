//! Page-level touches: the console greeting and the fade-in on load.

use crate::dom::{self, Elements};
use crate::events;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;

const FADE_DELAY_MS: u32 = 50;
const FADE_TRANSITION: &str = "opacity 0.6s ease";

pub fn print_banner() {
    gloo_console::log!("%c✨ Welcome!", "font-size: 22px; color: #5C1F1F; font-weight: 400;");
    gloo_console::log!("%cThank you for visiting my portfolio.", "font-size: 15px; color: #6E6A65;");
    gloo_console::log!(
        "%cCrafted with care and attention to detail.",
        "font-size: 13px; color: #A89882;"
    );
}

/// Fade the body in once every resource has loaded. The module may start
/// after `load` has already fired, in which case the fade runs now.
pub fn bind(_els: &Elements) -> Result<(), JsValue> {
    if dom::document().ready_state() == "complete" {
        fade_in();
        return Ok(());
    }
    events::listen(&dom::window(), "load", |_: web_sys::Event| fade_in())
}

pub fn fade_in() {
    let Some(body) = dom::body() else {
        return;
    };
    dom::set_style(&body, "opacity", "0");
    Timeout::new(FADE_DELAY_MS, move || {
        dom::set_style(&body, "transition", FADE_TRANSITION);
        dom::set_style(&body, "opacity", "1");
    })
    .forget();
}
