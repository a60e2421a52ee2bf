//! Toast notifications.

use crate::dom;
use crate::state;
use folio_core::notify::{
    self, NOTIFICATION_KEYFRAMES, NOTIFICATION_STYLE_ID, NotificationKind, NotificationPhase,
    NotificationTimeline,
};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

/// Show a toast. Display failures are logged, never raised.
pub fn show(message: &str, kind: NotificationKind) {
    if let Err(err) = try_show(message, kind) {
        tracing::warn!(?err, "could not display notification");
    }
}

fn try_show(message: &str, kind: NotificationKind) -> Result<(), JsValue> {
    let doc = dom::document();
    let toast: HtmlElement = doc.create_element("div")?.dyn_into()?;
    toast.set_class_name("notification");
    toast.style().set_css_text(&notify::inline_style(kind));
    toast.set_text_content(Some(message));

    let body = doc
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&toast)?;
    ensure_keyframes(&doc)?;

    let timeline = state::with(|s| NotificationTimeline::from_config(&s.config));
    wasm_bindgen_futures::spawn_local(async move {
        for (wait_ms, phase) in timeline.transitions() {
            TimeoutFuture::new(wait_ms).await;
            match phase {
                NotificationPhase::Visible => {}
                NotificationPhase::Exiting => {
                    dom::set_style(&toast, "animation", notify::EXIT_ANIMATION);
                }
                // May already be gone if the page removed it
                NotificationPhase::Removed => {
                    if toast.parent_node().is_some() {
                        toast.remove();
                    }
                }
            }
        }
    });
    Ok(())
}

fn ensure_keyframes(doc: &Document) -> Result<(), JsValue> {
    if doc.get_element_by_id(NOTIFICATION_STYLE_ID).is_some() {
        return Ok(());
    }
    let style = doc.create_element("style")?;
    style.set_id(NOTIFICATION_STYLE_ID);
    style.set_text_content(Some(NOTIFICATION_KEYFRAMES));
    match doc.head() {
        Some(head) => head.append_child(&style)?,
        None => doc
            .body()
            .ok_or_else(|| JsValue::from_str("document has no head or body"))?
            .append_child(&style)?,
    };
    Ok(())
}
