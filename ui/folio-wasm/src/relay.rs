//! Form-relay HTTP client.
//!
//! Posts the contact form's fields as `multipart/form-data` and reads the
//! relay's JSON verdict. The relay access key travels as a hidden form field.

use folio_core::{RelayError, RelayResponse};
use gloo_net::http::Request;
use web_sys::{FormData, HtmlFormElement};

pub async fn submit_form(
    endpoint: &str,
    form: &HtmlFormElement,
) -> Result<RelayResponse, RelayError> {
    let data = FormData::new_with_form(form)
        .map_err(|e| RelayError::Network(format!("could not read form: {e:?}")))?;

    let resp = Request::post(endpoint)
        .header("Accept", "application/json")
        .body(data)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;

    let status = resp.status();
    let body = resp.text().await.map_err(network)?;
    tracing::debug!(status, "relay responded");

    RelayResponse::from_http(status, &body)
}

fn network(err: gloo_net::Error) -> RelayError {
    RelayError::Network(err.to_string())
}
