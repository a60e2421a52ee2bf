//! Scroll-reveal of project cards, skill categories and timeline items.

use crate::dom::{self, Elements};
use crate::state;
use folio_core::reveal::{self, RevealAction, RevealTracker};
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub fn bind(els: &Elements) -> Result<(), JsValue> {
    if els.reveal_targets.is_empty() {
        return Ok(());
    }
    let config = state::config();
    state::with_mut(|s| {
        s.reveal = RevealTracker::new(els.reveal_targets.len(), config.reveal_once);
    });

    let targets = els.reveal_targets.clone();
    let cb = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let Ok(target) = entry.target().dyn_into::<HtmlElement>() else {
                    continue;
                };
                let Some(index) = targets.iter().position(|el| *el == target) else {
                    continue;
                };
                let action = state::with_mut(|s| s.reveal.on_intersect(index, entry.is_intersecting()));
                if let RevealAction::Reveal { unobserve } = action {
                    dom::set_style(&target, "opacity", reveal::SHOWN_OPACITY);
                    dom::set_style(&target, "transform", reveal::SHOWN_TRANSFORM);
                    if unobserve {
                        observer.unobserve(&target);
                    }
                }
            }
        },
    );

    let opts = IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    opts.set_root_margin(&config.reveal_root_margin);
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts)?;
    cb.forget();

    for (index, el) in els.reveal_targets.iter().enumerate() {
        dom::set_style(el, "opacity", reveal::HIDDEN_OPACITY);
        dom::set_style(el, "transform", reveal::HIDDEN_TRANSFORM);
        dom::set_style(
            el,
            "transition",
            &reveal::reveal_transition(index, config.reveal_stagger_ms),
        );
        observer.observe(el);
    }
    tracing::debug!(count = els.reveal_targets.len(), "scroll reveal armed");
    Ok(())
}
