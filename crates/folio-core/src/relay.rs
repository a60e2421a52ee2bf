//! Form-relay response handling.
//!
//! The relay answers with a JSON object carrying at least a boolean
//! `success`. Rejections usually come back with a 4xx status *and* a JSON
//! body, so the body is inspected before the status.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("network error: {0}")]
    Network(String),
    #[error("relay answered HTTP {0} without a readable body")]
    Status(u16),
    #[error("malformed relay response: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("relay rejected submission: {}", .0.as_deref().unwrap_or("no reason given"))]
    Rejected(Option<String>),
}

impl RelayResponse {
    pub fn from_http(status: u16, body: &str) -> Result<Self, RelayError> {
        match serde_json::from_str::<RelayResponse>(body) {
            Ok(resp) => Ok(resp),
            Err(_) if !(200..300).contains(&status) => Err(RelayError::Status(status)),
            Err(err) => Err(RelayError::Malformed(err)),
        }
    }

    /// Turn an unsuccessful relay answer into an error.
    pub fn into_result(self) -> Result<Self, RelayError> {
        if self.success {
            Ok(self)
        } else {
            Err(RelayError::Rejected(self.message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_body_parses() -> anyhow::Result<()> {
        let resp = RelayResponse::from_http(200, r#"{"success":true,"message":"Email sent"}"#)?;
        assert!(resp.success);
        assert_eq!(resp.message.as_deref(), Some("Email sent"));
        assert!(resp.into_result().is_ok());
        Ok(())
    }

    #[test]
    fn rejection_with_client_error_status_still_reads_body() -> anyhow::Result<()> {
        let resp = RelayResponse::from_http(400, r#"{"success":false,"message":"Invalid access key"}"#)?;
        let err = resp.into_result().unwrap_err();
        assert_eq!(err.to_string(), "relay rejected submission: Invalid access key");
        Ok(())
    }

    #[test]
    fn garbage_body_on_error_status_reports_status() {
        let err = RelayResponse::from_http(502, "<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, RelayError::Status(502)));
    }

    #[test]
    fn garbage_body_on_ok_status_is_malformed() {
        let err = RelayResponse::from_http(200, "ok").unwrap_err();
        assert!(matches!(err, RelayError::Malformed(_)));
    }

    #[test]
    fn missing_success_field_is_malformed() {
        let err = RelayResponse::from_http(200, r#"{"message":"hi"}"#).unwrap_err();
        assert!(matches!(err, RelayError::Malformed(_)));
    }
}
