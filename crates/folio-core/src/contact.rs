//! Contact form submission: `Idle -> Submitting -> Idle`.

use crate::config::SiteConfig;
use crate::notify::NotificationKind;
use crate::relay::{RelayError, RelayResponse};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting {
        original_label: String,
    },
}

/// What the page must do once the relay call has settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitEffects {
    pub message: String,
    pub kind: NotificationKind,
    pub reset_fields: bool,
    pub restore_label: String,
}

#[derive(Debug, Clone, Default)]
pub struct SubmitMachine {
    phase: SubmitPhase,
}

impl SubmitMachine {
    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, SubmitPhase::Submitting { .. })
    }

    /// Enter `Submitting`, remembering the button label. Refused while a
    /// submission is already in flight.
    pub fn begin(&mut self, current_label: &str) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.phase = SubmitPhase::Submitting {
            original_label: current_label.to_owned(),
        };
        true
    }

    /// Settle the in-flight submission and return to `Idle`.
    ///
    /// Every outcome restores the button; only a successful relay answer
    /// clears the form.
    pub fn finish(
        &mut self,
        outcome: &Result<RelayResponse, RelayError>,
        config: &SiteConfig,
    ) -> Option<SubmitEffects> {
        let SubmitPhase::Submitting { original_label } = std::mem::take(&mut self.phase) else {
            return None;
        };
        let succeeded = matches!(outcome, Ok(resp) if resp.success);
        let (message, kind) = if succeeded {
            (config.success_message.clone(), NotificationKind::Success)
        } else {
            (config.error_message.clone(), NotificationKind::Error)
        };
        Some(SubmitEffects {
            message,
            kind,
            reset_fields: succeeded,
            restore_label: original_label,
        })
    }
}

#[cfg(test)]
impl SubmitMachine {
    fn phase(&self) -> &SubmitPhase {
        &self.phase
    }
}
