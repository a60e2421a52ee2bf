//! Tech-tag stagger, played once when the about section comes into view.

use crate::dom::{self, Elements};
use crate::state;
use folio_core::tags;
use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub fn bind(els: &Elements) -> Result<(), JsValue> {
    let Some(about) = els.about.clone() else {
        tracing::debug!("no about section; tech tag animation inactive");
        return Ok(());
    };
    let config = state::config();
    let tech_tags = els.tech_tags.clone();
    let (step, base) = (config.tag_stagger_ms, config.tag_base_delay_ms);

    let cb = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if state::with_mut(|s| s.tags.on_intersect(entry.is_intersecting())) {
                    observer.unobserve(&entry.target());
                    animate(&tech_tags, step, base);
                }
            }
        },
    );

    let opts = IntersectionObserverInit::new();
    opts.set_threshold(&JsValue::from_f64(config.tag_threshold));
    let observer = IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &opts)?;
    cb.forget();
    observer.observe(&about);
    Ok(())
}

pub fn animate(tech_tags: &[HtmlElement], step_ms: u32, base_ms: u32) {
    for (index, tag) in tech_tags.iter().enumerate() {
        dom::set_style(tag, "opacity", "0");
        dom::set_style(tag, "transform", tags::HIDDEN_TRANSFORM);
        dom::set_style(tag, "transition", tags::TRANSITION);

        let tag = tag.clone();
        Timeout::new(tags::tag_delay_ms(index, step_ms, base_ms), move || {
            dom::set_style(&tag, "opacity", "1");
            dom::set_style(&tag, "transform", tags::SHOWN_TRANSFORM);
        })
        .forget();
    }
}
