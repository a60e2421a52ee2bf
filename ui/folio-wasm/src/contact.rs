//! Contact form submission.
//!
//! While the relay request is pending the submit button is disabled and
//! relabelled. Whatever the outcome, the button is restored afterwards.

use crate::dom::Elements;
use crate::events;
use crate::notify;
use crate::relay;
use crate::state;
use folio_core::{RelayError, RelayResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlButtonElement, HtmlFormElement};

pub fn bind(els: &Elements) -> Result<(), JsValue> {
    let Some(form) = els.contact_form.clone() else {
        tracing::debug!("no contact form on page");
        return Ok(());
    };
    let form2 = form.clone();
    events::listen(&form, "submit", move |e: web_sys::Event| {
        e.prevent_default();
        let form3 = form2.clone();
        wasm_bindgen_futures::spawn_local(async move {
            submit(&form3).await;
        });
    })?;
    Ok(())
}

fn submit_button(form: &HtmlFormElement) -> Option<HtmlButtonElement> {
    form.query_selector(r#"button[type="submit"]"#)
        .ok()
        .flatten()
        .and_then(|b| b.dyn_into().ok())
}

/// A submission that has been started and owns the form's submit button
/// until it is settled.
pub struct Submission {
    button: Option<HtmlButtonElement>,
}

/// Start a submission: disable and relabel the button. Returns `None` if one
/// is already in flight.
pub fn begin(form: &HtmlFormElement) -> Option<Submission> {
    let button = submit_button(form);
    let label = button
        .as_ref()
        .and_then(|b| b.text_content())
        .unwrap_or_default();

    if !state::with_mut(|s| s.submit.begin(&label)) {
        tracing::debug!("submission already in flight");
        return None;
    }
    if let Some(button) = &button {
        button.set_disabled(true);
        button.set_text_content(Some(&state::config().sending_label));
    }
    Some(Submission { button })
}

/// Apply the relay outcome: notify, clear the fields on success and give the
/// button back.
pub fn settle(
    form: &HtmlFormElement,
    submission: Submission,
    outcome: Result<RelayResponse, RelayError>,
) {
    if let Err(err) = &outcome {
        tracing::error!(%err, "contact form submission failed");
    }
    let config = state::config();
    let Some(effects) = state::with_mut(|s| s.submit.finish(&outcome, &config)) else {
        return;
    };
    notify::show(&effects.message, effects.kind);
    if effects.reset_fields {
        form.reset();
    }
    if let Some(button) = &submission.button {
        button.set_disabled(false);
        button.set_text_content(Some(&effects.restore_label));
    }
}

pub async fn submit(form: &HtmlFormElement) {
    let Some(submission) = begin(form) else {
        return;
    };
    let endpoint = state::config().relay_endpoint;
    let outcome = relay::submit_form(&endpoint, form)
        .await
        .and_then(RelayResponse::into_result);
    settle(form, submission, outcome);
}
