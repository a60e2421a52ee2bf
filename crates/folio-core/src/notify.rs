//! Toast notifications.
//!
//! A toast enters immediately, stays for the display period, plays its exit
//! animation, and is then removed from the document.

use crate::config::SiteConfig;

/// Id of the `<style>` element holding the toast keyframes. Injected once.
pub const NOTIFICATION_STYLE_ID: &str = "notificationStyles";

pub const ENTER_ANIMATION: &str = "slideIn 0.4s cubic-bezier(0.4, 0, 0.2, 1)";
pub const EXIT_ANIMATION: &str = "slideOut 0.4s cubic-bezier(0.4, 0, 0.2, 1)";

pub const NOTIFICATION_KEYFRAMES: &str = "
@keyframes slideIn {
  from { transform: translateX(450px); opacity: 0; }
  to { transform: translateX(0); opacity: 1; }
}
@keyframes slideOut {
  from { transform: translateX(0); opacity: 1; }
  to { transform: translateX(450px); opacity: 0; }
}
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn background(self) -> &'static str {
        match self {
            NotificationKind::Success => "#5C1F1F",
            NotificationKind::Error => "#E57373",
        }
    }
}

/// Inline style for a toast of the given kind.
pub fn inline_style(kind: NotificationKind) -> String {
    format!(
        "position: fixed; top: calc(var(--nav-height) + 20px); right: 30px; \
         background: {}; color: #F5EFE3; padding: 1.25rem 1.75rem; border-radius: 10px; \
         box-shadow: 0 8px 24px rgba(92, 31, 31, 0.20); z-index: 2000; animation: {}; \
         font-family: 'orpheuspro', Georgia, serif; font-size: 0.9375rem; max-width: 400px; \
         border: 1px solid rgba(255, 255, 255, 0.1);",
        kind.background(),
        ENTER_ANIMATION,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Visible,
    Exiting,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTimeline {
    pub display_ms: u32,
    pub exit_ms: u32,
}

impl NotificationTimeline {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            display_ms: config.notification_display_ms,
            exit_ms: config.notification_exit_ms,
        }
    }

    /// Milliseconds after creation at which the toast leaves the document.
    pub fn removal_at(&self) -> u32 {
        self.display_ms.saturating_add(self.exit_ms)
    }

    /// Phase changes after creation, in order. Each wait is measured from
    /// the previous change.
    pub fn transitions(&self) -> [(u32, NotificationPhase); 2] {
        [
            (self.display_ms, NotificationPhase::Exiting),
            (self.exit_ms, NotificationPhase::Removed),
        ]
    }
}

#[cfg(test)]
impl NotificationTimeline {
    fn phase_at(&self, elapsed_ms: u32) -> NotificationPhase {
        if elapsed_ms < self.display_ms {
            NotificationPhase::Visible
        } else if elapsed_ms < self.removal_at() {
            NotificationPhase::Exiting
        } else {
            NotificationPhase::Removed
        }
    }
}
