//! DOM element bindings.
//!
//! Every element the page behavior touches is resolved once, after the
//! document is ready. Optional page parts are `Option`s: a missing element
//! leaves its feature inactive.

use folio_core::SiteConfig;
use folio_core::scroll::ScrollMetrics;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Document, Element, HtmlElement, HtmlFormElement,
    HtmlImageElement,
};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn window() -> web_sys::Window {
    gloo_utils::window()
}

pub fn body() -> Option<HtmlElement> {
    document().body()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

pub fn query_typed<T: JsCast>(selector: &str) -> Option<T> {
    query(selector).and_then(|e| e.dyn_into::<T>().ok())
}

/// All elements matching `selector`, cast to `T`. Invalid selectors match
/// nothing.
pub fn query_all<T: JsCast>(selector: &str) -> Vec<T> {
    let Ok(nl) = document().query_selector_all(selector) else {
        tracing::warn!(selector, "invalid selector");
        return Vec::new();
    };
    let mut v = Vec::with_capacity(nl.length() as usize);
    for i in 0..nl.length() {
        if let Some(el) = nl.item(i).and_then(|n| n.dyn_into::<T>().ok()) {
            v.push(el);
        }
    }
    v
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn has_class(el: &Element, cls: &str) -> bool {
    el.class_list().contains(cls)
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn scroll_y() -> f64 {
    window().scroll_y().unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn scroll_metrics() -> ScrollMetrics {
    let (scroll_height, client_height) = document()
        .document_element()
        .map(|root| (root.scroll_height() as f64, root.client_height() as f64))
        .unwrap_or_default();
    ScrollMetrics {
        offset: scroll_y(),
        scroll_height,
        client_height,
    }
}

/// Run `f` once the document has been parsed: immediately if it already has,
/// otherwise on the first `DOMContentLoaded`.
pub fn when_ready(f: impl FnOnce() + 'static) -> Result<(), JsValue> {
    let doc = document();
    if doc.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let cb = Closure::once(move || f());
    let opts = AddEventListenerOptions::new();
    opts.set_once(true);
    doc.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        cb.as_ref().unchecked_ref(),
        &opts,
    )?;
    cb.forget();
    Ok(())
}

// ── Elements struct ──

/// The preview modal and its parts. Bound as a unit: a modal missing any
/// part is treated as absent.
#[derive(Clone)]
pub struct ModalElements {
    pub root: Element,
    pub overlay: Element,
    pub close: Element,
    pub container: Element,
    pub title: Element,
    pub image: HtmlImageElement,
}

/// All DOM element references used by the page behavior.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Navigation
    pub nav: Option<Element>,
    pub nav_menu: Option<Element>,
    pub nav_toggle: Option<HtmlElement>,
    pub nav_links: Vec<Element>,
    pub fragment_links: Vec<Element>,
    pub scroll_progress: Option<HtmlElement>,

    // Sections
    pub sections: Vec<HtmlElement>,
    pub hero: Option<HtmlElement>,
    pub about: Option<Element>,
    pub tech_tags: Vec<HtmlElement>,
    pub reveal_targets: Vec<HtmlElement>,

    // Contact
    pub contact_form: Option<HtmlFormElement>,

    // Projects
    pub modal: Option<ModalElements>,
    pub modal_triggers: Vec<Element>,
}

macro_rules! get_el {
    ($id:expr) => {
        by_id($id).ok_or_else(|| JsValue::from_str(&format!("missing element #{}", $id)))?
    };
}

macro_rules! get_img {
    ($id:expr) => {
        by_id_typed::<HtmlImageElement>($id)
            .ok_or_else(|| JsValue::from_str(&format!("missing img #{}", $id)))?
    };
}

impl ModalElements {
    pub fn bind() -> Result<ModalElements, JsValue> {
        Ok(ModalElements {
            root: get_el!("projectModal"),
            overlay: get_el!("modalOverlay"),
            close: get_el!("modalClose"),
            container: query(".modal-container")
                .ok_or_else(|| JsValue::from_str("missing .modal-container"))?,
            title: get_el!("modalTitle"),
            image: get_img!("modalImage"),
        })
    }
}

impl Elements {
    /// Resolve all DOM references. Call once the document is ready.
    pub fn bind(config: &SiteConfig) -> Elements {
        let modal = match ModalElements::bind() {
            Ok(modal) => Some(modal),
            Err(err) => {
                tracing::debug!(?err, "project modal not present");
                None
            }
        };

        Elements {
            nav: by_id("nav"),
            nav_menu: by_id("navMenu"),
            nav_toggle: by_id_typed("navToggle"),
            nav_links: query_all(".nav-link"),
            fragment_links: query_all(r##"a[href^="#"]"##),
            scroll_progress: by_id_typed("scrollProgress"),

            sections: query_all("section[id]"),
            hero: query_typed(".hero"),
            about: query(".about"),
            tech_tags: query_all(".tech-tag"),
            reveal_targets: query_all(&config.reveal_selector()),

            contact_form: by_id_typed("contactForm"),

            modal,
            modal_triggers: query_all("[data-open-modal]"),
        }
    }
}
