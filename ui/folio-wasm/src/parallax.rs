//! Hero parallax, desktop widths only.

use crate::dom::{self, Elements};
use crate::events;
use crate::state;
use folio_core::parallax;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub fn bind(els: &Elements) -> Result<(), JsValue> {
    let Some(hero) = els.hero.clone() else {
        return Ok(());
    };
    let config = state::config();
    if !parallax::is_enabled(dom::viewport_width(), config.parallax_min_width) {
        tracing::debug!("viewport too narrow; parallax inactive");
        return Ok(());
    }

    let speed = config.parallax_speed;
    let frame = Closure::<dyn FnMut(f64)>::new(move |_ts: f64| {
        if let Some(shift) = parallax::translate_for(dom::scroll_y(), dom::viewport_height(), speed) {
            dom::set_style(&hero, "transform", &parallax::hero_transform(shift));
        }
        state::with_mut(|s| s.parallax.complete());
    });

    events::listen(&dom::window(), "scroll", move |_: web_sys::Event| {
        if !state::with_mut(|s| s.parallax.request()) {
            return;
        }
        if dom::window()
            .request_animation_frame(frame.as_ref().unchecked_ref())
            .is_err()
        {
            state::with_mut(|s| s.parallax.complete());
        }
    })
}
