//! Nav "scrolled" styling and the scroll progress bar.

use crate::dom::{self, Elements};
use crate::events;
use crate::state;
use folio_core::scroll;
use wasm_bindgen::prelude::*;

pub fn bind(els: &Elements) -> Result<(), JsValue> {
    if els.nav.is_none() && els.scroll_progress.is_none() {
        tracing::debug!("no nav or progress bar; scroll chrome inactive");
        return Ok(());
    }
    let els2 = els.clone();
    events::listen(&dom::window(), "scroll", move |_: web_sys::Event| update(&els2))?;
    update(els);
    Ok(())
}

pub fn update(els: &Elements) {
    let metrics = dom::scroll_metrics();
    let view = state::with(|s| s.chrome.view(&metrics));
    if let Some(nav) = &els.nav {
        dom::toggle_class(nav, "scrolled", view.scrolled);
    }
    if let Some(bar) = &els.scroll_progress {
        dom::set_style(bar, "transform", &scroll::progress_transform(view.progress));
    }
}
