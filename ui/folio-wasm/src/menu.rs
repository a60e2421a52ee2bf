//! Mobile navigation menu.
//!
//! The toggle flips `active` on `#navMenu` and swaps its `<i>` glyph between
//! `fa-bars` and `fa-times`. Any click outside `#nav` closes an open menu.
//! Pages without `#navToggle` get no mobile menu at all.

use crate::dom::{self, Elements};
use crate::events;
use crate::state;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub fn bind(els: &Elements) -> Result<(), JsValue> {
    let (Some(toggle), Some(_)) = (&els.nav_toggle, &els.nav_menu) else {
        tracing::debug!("nav toggle absent; mobile menu inactive");
        return Ok(());
    };

    let els2 = els.clone();
    events::listen(toggle, "click", move |_: web_sys::Event| {
        state::with_mut(|s| s.menu.toggle());
        render(&els2);
    })?;

    // Close when clicking outside the nav container
    if let Some(nav) = els.nav.clone() {
        let els3 = els.clone();
        events::listen(&dom::document(), "click", move |e: web_sys::Event| {
            let inside = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
                .is_some_and(|node| nav.contains(Some(&node)));
            if state::with_mut(|s| s.menu.on_outside_click(inside)) {
                render(&els3);
            }
        })?;
    }
    Ok(())
}

/// Mirror the controller onto the menu class and the toggle glyph.
pub fn render(els: &Elements) {
    let (open, icon) = state::with(|s| (s.menu.is_open(), s.menu.icon()));
    if let Some(menu) = &els.nav_menu {
        dom::toggle_class(menu, "active", open);
    }
    let glyph = els
        .nav_toggle
        .as_ref()
        .and_then(|t| t.query_selector("i").ok().flatten());
    if let Some(glyph) = glyph {
        dom::remove_class(&glyph, icon.other().class());
        dom::add_class(&glyph, icon.class());
    }
}
