//! Event binding.
//!
//! Every feature exposes a `bind` that wires its own listeners. Features are
//! bound independently: one failing to bind is logged and the rest still run.
//! Async work is spawned via `wasm_bindgen_futures::spawn_local`.

use crate::dom::Elements;
use crate::{anchors, chrome, contact, highlight, menu, modal, page, parallax, reveal, tags};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::EventTarget;

type BindFn = fn(&Elements) -> Result<(), JsValue>;

/// Attach `handler` to `target` for the lifetime of the page.
pub fn listen<T>(
    target: &T,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<(), JsValue>
where
    T: AsRef<EventTarget>,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target
        .as_ref()
        .add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Bind all feature listeners. Scroll listeners fire in this order.
pub fn bind_events(els: &Elements) {
    let features: [(&str, BindFn); 10] = [
        ("smooth-scroll", anchors::bind),
        ("scroll-chrome", chrome::bind),
        ("mobile-menu", menu::bind),
        ("contact-form", contact::bind),
        ("scroll-reveal", reveal::bind),
        ("parallax", parallax::bind),
        ("tech-tags", tags::bind),
        ("active-section", highlight::bind),
        ("page-fade", page::bind),
        ("project-modal", modal::bind),
    ];
    for (name, bind) in features {
        if let Err(err) = bind(els) {
            tracing::error!(feature = name, ?err, "failed to bind feature");
        }
    }
}
