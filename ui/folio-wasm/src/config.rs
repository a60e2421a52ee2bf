//! Page-supplied configuration.
//!
//! A page may carry `<script type="application/json" id="siteConfig">` with
//! any subset of [`SiteConfig`] fields. Anything unreadable falls back to the
//! defaults; configuration never blocks start-up.

use crate::dom;
use folio_core::SiteConfig;

pub const CONFIG_ELEMENT_ID: &str = "siteConfig";

pub fn load() -> SiteConfig {
    let Some(el) = dom::by_id(CONFIG_ELEMENT_ID) else {
        tracing::debug!("no inline site config; using defaults");
        return SiteConfig::default();
    };
    let text = el.text_content().unwrap_or_default();
    match SiteConfig::from_json(&text) {
        Ok(config) => {
            tracing::debug!(endpoint = %config.relay_endpoint, "loaded inline site config");
            config
        }
        Err(err) => {
            tracing::warn!(%err, "ignoring inline site config");
            SiteConfig::default()
        }
    }
}
