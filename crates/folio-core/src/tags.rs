//! One-shot staggered reveal of tech tags when the about section shows.

pub const HIDDEN_TRANSFORM: &str = "scale(0.85) translateY(10px)";
pub const SHOWN_TRANSFORM: &str = "scale(1) translateY(0)";
pub const TRANSITION: &str =
    "opacity 0.5s cubic-bezier(0.4, 0, 0.2, 1), transform 0.5s cubic-bezier(0.4, 0, 0.2, 1)";

pub fn tag_delay_ms(index: usize, step_ms: u32, base_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    index.saturating_mul(step_ms).saturating_add(base_ms)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagStagger {
    fired: bool,
}

impl TagStagger {
    /// Returns `true` exactly once: on the first intersecting notification.
    pub fn on_intersect(&mut self, is_intersecting: bool) -> bool {
        if !is_intersecting || self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}

#[cfg(test)]
impl TagStagger {
    fn has_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_start_at_base_offset() {
        let delays: Vec<u32> = (0..4).map(|i| tag_delay_ms(i, 60, 200)).collect();
        assert_eq!(delays, vec![200, 260, 320, 380]);
    }

    #[test]
    fn fires_once() {
        let mut stagger = TagStagger::default();
        assert!(!stagger.on_intersect(false));
        assert!(stagger.on_intersect(true));
        assert!(!stagger.on_intersect(true));
        assert!(stagger.has_fired());
    }
}
