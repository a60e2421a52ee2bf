//! Smooth scrolling for same-page links.

use crate::dom::{self, Elements};
use crate::events;
use crate::menu;
use crate::state;
use folio_core::anchor;
use wasm_bindgen::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

pub fn bind(els: &Elements) -> Result<(), JsValue> {
    for link in &els.fragment_links {
        let link2 = link.clone();
        let els2 = els.clone();
        events::listen(link, "click", move |e: web_sys::Event| {
            e.prevent_default();
            let href = link2.get_attribute("href").unwrap_or_default();
            navigate(&els2, &href);
        })?;
    }
    Ok(())
}

/// Scroll to the element referenced by `href`, closing the mobile menu
/// first. Does nothing when the fragment resolves to no element.
pub fn navigate(els: &Elements, href: &str) {
    let mut target = None;
    let closed_menu = state::with_mut(|s| {
        anchor::plan_navigation(href, &mut s.menu, |id| {
            target = dom::by_id(id);
            target.is_some()
        })
        .map(|plan| plan.closed_menu)
    });
    let (Some(closed_menu), Some(target)) = (closed_menu, target) else {
        tracing::debug!(href, "fragment link without target");
        return;
    };
    if closed_menu {
        menu::render(els);
    }
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
}
