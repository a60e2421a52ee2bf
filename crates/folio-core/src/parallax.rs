//! Hero parallax.

pub fn is_enabled(viewport_width: f64, min_width: f64) -> bool {
    viewport_width > min_width
}

/// Vertical shift for the hero, or `None` once the first viewport has been
/// scrolled past (the last applied shift is left in place).
pub fn translate_for(scroll_y: f64, viewport_height: f64, speed: f64) -> Option<f64> {
    (scroll_y < viewport_height).then(|| scroll_y * speed)
}

pub fn hero_transform(shift: f64) -> String {
    format!("translateY({shift}px)")
}

/// At most one pending animation-frame update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParallaxGate {
    pending: bool,
}

impl ParallaxGate {
    /// Returns `true` if the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
impl ParallaxGate {
    fn is_pending(&self) -> bool {
        self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_only_above_min_width() {
        assert!(!is_enabled(768.0, 768.0));
        assert!(is_enabled(769.0, 768.0));
        assert!(!is_enabled(375.0, 768.0));
    }

    #[test]
    fn shift_within_first_viewport() {
        assert_eq!(translate_for(0.0, 900.0, 0.4), Some(0.0));
        assert_eq!(translate_for(500.0, 900.0, 0.4), Some(200.0));
        assert_eq!(translate_for(900.0, 900.0, 0.4), None);
        assert_eq!(hero_transform(200.0), "translateY(200px)");
    }

    #[test]
    fn gate_coalesces_requests() {
        let mut gate = ParallaxGate::default();
        assert!(gate.request());
        assert!(!gate.request());
        assert!(!gate.request());
        assert!(gate.is_pending());
        gate.complete();
        assert!(gate.request());
    }
}
