//! Browser-independent behavior for the portfolio page.
//!
//! Every page feature is modelled here as a small controller driven by plain
//! values. The wasm crate translates DOM events into calls on these types and
//! applies the returned effects back to the document.

pub mod anchor;
pub mod config;
pub mod contact;
pub mod highlight;
pub mod menu;
pub mod modal;
pub mod notify;
pub mod parallax;
pub mod relay;
pub mod reveal;
pub mod scroll;
pub mod tags;

pub use config::{ConfigError, SiteConfig};
pub use relay::{RelayError, RelayResponse};
