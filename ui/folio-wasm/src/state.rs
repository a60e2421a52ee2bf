//! Global UI state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Handlers borrow only long enough to run a controller transition, then
//! apply the returned effects to the DOM with the borrow released.

use folio_core::SiteConfig;
use folio_core::contact::SubmitMachine;
use folio_core::menu::MenuController;
use folio_core::modal::ModalController;
use folio_core::parallax::ParallaxGate;
use folio_core::reveal::RevealTracker;
use folio_core::scroll::ScrollChrome;
use folio_core::tags::TagStagger;
use std::cell::RefCell;

/// One independently owned controller per page feature.
#[derive(Debug, Clone)]
pub struct UiState {
    pub config: SiteConfig,
    pub chrome: ScrollChrome,
    pub menu: MenuController,
    pub submit: SubmitMachine,
    pub reveal: RevealTracker,
    pub parallax: ParallaxGate,
    pub tags: TagStagger,
    pub modal: ModalController,
}

impl UiState {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            chrome: ScrollChrome::new(config.nav_scrolled_threshold),
            menu: MenuController::default(),
            submit: SubmitMachine::default(),
            reveal: RevealTracker::default(),
            parallax: ParallaxGate::default(),
            tags: TagStagger::default(),
            modal: ModalController::default(),
            config,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}

// ── Thread-local singleton ──

thread_local! {
    static STATE: RefCell<UiState> = RefCell::new(UiState::default());
}

/// Replace the state with fresh controllers built from `config`.
pub fn install(config: SiteConfig) {
    STATE.with(|s| *s.borrow_mut() = UiState::new(config));
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&UiState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut UiState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

pub fn config() -> SiteConfig {
    with(|s| s.config.clone())
}
