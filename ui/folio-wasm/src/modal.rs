//! Project image-preview modal.
//!
//! Opened from any `[data-open-modal]` link inside a `.project-card`, which
//! supplies `data-title` and `data-image`. Closed by the close button, a click
//! on the overlay, or Escape. Clicks inside `.modal-container` stay there.

use crate::dom::{self, Elements, ModalElements};
use crate::events;
use crate::state;
use folio_core::modal::{ModalEffect, ModalEvent, ProjectCard};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub fn bind(els: &Elements) -> Result<(), JsValue> {
    let Some(modal) = els.modal.clone() else {
        return Ok(());
    };

    for trigger in &els.modal_triggers {
        let trigger2 = trigger.clone();
        let modal2 = modal.clone();
        events::listen(trigger, "click", move |e: web_sys::Event| {
            e.prevent_default();
            let Some(card) = trigger2.closest(".project-card").ok().flatten() else {
                tracing::warn!("modal trigger outside a project card");
                return;
            };
            let card = ProjectCard::from_attrs(
                card.get_attribute("data-title"),
                card.get_attribute("data-image"),
            );
            dispatch(&modal2, ModalEvent::Open(card));
        })?;
    }

    let modal2 = modal.clone();
    events::listen(&modal.close, "click", move |_: web_sys::Event| {
        dispatch(&modal2, ModalEvent::CloseButton);
    })?;

    let modal2 = modal.clone();
    events::listen(&modal.overlay, "click", move |_: web_sys::Event| {
        dispatch(&modal2, ModalEvent::OverlayClick);
    })?;

    let modal2 = modal.clone();
    events::listen(&modal.container, "click", move |e: web_sys::Event| {
        e.stop_propagation();
        dispatch(&modal2, ModalEvent::ContentClick);
    })?;

    let modal2 = modal.clone();
    events::listen(&dom::document(), "keydown", move |e: web_sys::Event| {
        if let Some(key) = e.dyn_ref::<web_sys::KeyboardEvent>() {
            dispatch(&modal2, ModalEvent::Key(key.key()));
        }
    })
}

/// Feed an event to the modal controller and apply the result.
pub fn dispatch(modal: &ModalElements, event: ModalEvent) {
    match state::with_mut(|s| s.modal.handle(event)) {
        ModalEffect::Show(card) => {
            modal.title.set_text_content(Some(&card.title));
            modal.image.set_src(&card.image);
            modal.image.set_alt(&card.alt_text());
            dom::add_class(&modal.root, "active");
            if let Some(body) = dom::body() {
                dom::set_style(&body, "overflow", "hidden");
            }
        }
        ModalEffect::Hide => {
            dom::remove_class(&modal.root, "active");
            if let Some(body) = dom::body() {
                let _ = body.style().remove_property("overflow");
            }
        }
        ModalEffect::None => {}
    }
}
