//! Active nav link highlighting.

use crate::dom::{self, Elements};
use crate::events;
use crate::state;
use folio_core::highlight;
use wasm_bindgen::prelude::*;

pub fn bind(els: &Elements) -> Result<(), JsValue> {
    if els.sections.is_empty() || els.nav_links.is_empty() {
        return Ok(());
    }
    let els2 = els.clone();
    events::listen(&dom::window(), "scroll", move |_: web_sys::Event| update(&els2))
}

pub fn update(els: &Elements) {
    let offset = state::with(|s| s.config.highlight_offset);
    let tops: Vec<(String, f64)> = els
        .sections
        .iter()
        .map(|section| (section.id(), f64::from(section.offset_top())))
        .collect();
    let current = highlight::active_section(
        tops.iter().map(|(id, top)| (id.as_str(), *top)),
        dom::scroll_y(),
        offset,
    );
    for link in &els.nav_links {
        let href = link.get_attribute("href").unwrap_or_default();
        dom::toggle_class(link, "active", highlight::is_link_for(&href, current));
    }
}
