//! Scroll-reveal of content cards.
//!
//! Each matched element starts hidden and slides into place the first time it
//! intersects the viewport. Transitions are staggered by document order.

pub const HIDDEN_OPACITY: &str = "0";
pub const HIDDEN_TRANSFORM: &str = "translateY(30px)";
pub const SHOWN_OPACITY: &str = "1";
pub const SHOWN_TRANSFORM: &str = "translateY(0)";

const EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u64 {
    index as u64 * u64::from(step_ms)
}

/// CSS `transition` value for the element at `index`.
pub fn reveal_transition(index: usize, step_ms: u32) -> String {
    let delay = stagger_delay_ms(index, step_ms) as f64 / 1_000.0;
    format!("opacity 0.7s {EASING} {delay}s, transform 0.7s {EASING} {delay}s")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    Reveal { unobserve: bool },
    Ignore,
}

#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
    once: bool,
}

impl RevealTracker {
    pub fn new(count: usize, once: bool) -> Self {
        Self {
            revealed: vec![false; count],
            once,
        }
    }

    pub fn on_intersect(&mut self, index: usize, is_intersecting: bool) -> RevealAction {
        if !is_intersecting {
            return RevealAction::Ignore;
        }
        let Some(slot) = self.revealed.get_mut(index) else {
            tracing::debug!(index, "intersection for untracked reveal target");
            return RevealAction::Ignore;
        };
        if *slot && self.once {
            return RevealAction::Ignore;
        }
        *slot = true;
        RevealAction::Reveal {
            unobserve: self.once,
        }
    }
}

#[cfg(test)]
impl RevealTracker {
    fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transition_delay_grows_with_index() {
        assert_eq!(
            reveal_transition(0, 100),
            "opacity 0.7s cubic-bezier(0.4, 0, 0.2, 1) 0s, transform 0.7s cubic-bezier(0.4, 0, 0.2, 1) 0s"
        );
        assert!(reveal_transition(3, 100).ends_with(" 0.3s"));
        assert_eq!(stagger_delay_ms(12, 100), 1_200);
    }

    #[test]
    fn once_mode_reveals_exactly_once() {
        let mut tracker = RevealTracker::new(2, true);
        assert_eq!(tracker.on_intersect(1, false), RevealAction::Ignore);
        assert_eq!(
            tracker.on_intersect(1, true),
            RevealAction::Reveal { unobserve: true }
        );
        assert_eq!(tracker.on_intersect(1, true), RevealAction::Ignore);
        assert!(tracker.is_revealed(1));
        assert!(!tracker.is_revealed(0));
        assert_eq!(tracker.revealed_count(), 1);
    }

    #[test]
    fn repeat_mode_keeps_observing() {
        let mut tracker = RevealTracker::new(1, false);
        let action = RevealAction::Reveal { unobserve: false };
        assert_eq!(tracker.on_intersect(0, true), action);
        assert_eq!(tracker.on_intersect(0, true), action);
    }

    #[test]
    fn unknown_index_is_ignored() {
        let mut tracker = RevealTracker::new(1, true);
        assert_eq!(tracker.on_intersect(5, true), RevealAction::Ignore);
    }
}
