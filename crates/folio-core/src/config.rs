//! Site configuration.
//!
//! Every tunable the page behavior relies on lives in [`SiteConfig`]. The
//! defaults reproduce the stock portfolio page; a page may override any
//! subset of fields with an inline JSON block.

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    pub relay_endpoint: String,
    pub nav_scrolled_threshold: f64,
    pub parallax_min_width: f64,
    pub parallax_speed: f64,
    pub highlight_offset: f64,
    pub notification_display_ms: u32,
    pub notification_exit_ms: u32,
    pub reveal_selectors: Vec<String>,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub reveal_stagger_ms: u32,
    /// Stop observing an element once it has been revealed.
    pub reveal_once: bool,
    pub tag_threshold: f64,
    pub tag_stagger_ms: u32,
    pub tag_base_delay_ms: u32,
    pub sending_label: String,
    pub success_message: String,
    pub error_message: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            relay_endpoint: DEFAULT_RELAY_ENDPOINT.to_owned(),
            nav_scrolled_threshold: 50.0,
            parallax_min_width: 768.0,
            parallax_speed: 0.4,
            highlight_offset: 150.0,
            notification_display_ms: 4_500,
            notification_exit_ms: 400,
            reveal_selectors: vec![
                ".project-card".to_owned(),
                ".skill-category".to_owned(),
                ".timeline-item".to_owned(),
            ],
            reveal_threshold: 0.15,
            reveal_root_margin: "0px 0px -80px 0px".to_owned(),
            reveal_stagger_ms: 100,
            reveal_once: true,
            tag_threshold: 0.3,
            tag_stagger_ms: 60,
            tag_base_delay_ms: 200,
            sending_label: "Sending...".to_owned(),
            success_message: "Thank you for your message! I'll get back to you soon.".to_owned(),
            error_message: "Oops! Something went wrong. Please try again.".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON override on top of the defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let endpoint = self.relay_endpoint.trim();
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(invalid("relayEndpoint", "must be an absolute http(s) URL"));
        }
        for (field, value) in [
            ("revealThreshold", self.reveal_threshold),
            ("tagThreshold", self.tag_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must be within 0.0..=1.0"));
            }
        }
        for (field, value) in [
            ("navScrolledThreshold", self.nav_scrolled_threshold),
            ("parallaxMinWidth", self.parallax_min_width),
            ("parallaxSpeed", self.parallax_speed),
            ("highlightOffset", self.highlight_offset),
        ] {
            if !value.is_finite() {
                return Err(invalid(field, "must be a finite number"));
            }
        }
        if self.reveal_selectors.iter().any(|s| s.trim().is_empty()) {
            return Err(invalid("revealSelectors", "selectors must not be empty"));
        }
        Ok(())
    }

    /// The reveal selectors joined into one `querySelectorAll` group.
    pub fn reveal_selector(&self) -> String {
        self.reveal_selectors.join(", ")
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_yields_defaults() -> anyhow::Result<()> {
        let config = SiteConfig::from_json("{}")?;
        assert_eq!(config, SiteConfig::default());
        Ok(())
    }

    #[test]
    fn partial_override_keeps_other_defaults() -> anyhow::Result<()> {
        let config = SiteConfig::from_json(r#"{"parallaxSpeed": 0.25, "revealOnce": false}"#)?;
        assert_eq!(config.parallax_speed, 0.25);
        assert!(!config.reveal_once);
        assert_eq!(config.relay_endpoint, DEFAULT_RELAY_ENDPOINT);
        assert_eq!(config.highlight_offset, 150.0);
        Ok(())
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn misspelled_key_is_a_parse_error() {
        let err = SiteConfig::from_json(r#"{"parallaxspeed": 0.2}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("parallaxspeed"));
    }

    #[test]
    fn rejects_relative_endpoint() {
        let err = SiteConfig::from_json(r#"{"relayEndpoint": "/submit"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "relayEndpoint", .. }));
    }

    #[test]
    fn rejects_threshold_out_of_range() {
        let err = SiteConfig::from_json(r#"{"tagThreshold": 1.5}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "tagThreshold", .. }));
    }

    #[test]
    fn reveal_selector_joins_group() {
        assert_eq!(
            SiteConfig::default().reveal_selector(),
            ".project-card, .skill-category, .timeline-item"
        );
    }
}
