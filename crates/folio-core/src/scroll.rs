//! Nav "scrolled" marker and the reading progress bar.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    /// Current vertical scroll offset.
    pub offset: f64,
    /// Full height of the document content.
    pub scroll_height: f64,
    /// Height of the visible viewport.
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn scrollable(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    /// Fraction of the document scrolled, in `0.0..=1.0`.
    ///
    /// A page that cannot scroll reports `0.0`.
    pub fn progress(&self) -> f64 {
        let scrollable = self.scrollable();
        if scrollable <= 0.0 {
            return 0.0;
        }
        (self.offset / scrollable).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeView {
    pub scrolled: bool,
    pub progress: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollChrome {
    threshold: f64,
}

impl ScrollChrome {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn view(&self, metrics: &ScrollMetrics) -> ChromeView {
        ChromeView {
            scrolled: metrics.offset > self.threshold,
            progress: metrics.progress(),
        }
    }
}

pub fn progress_transform(progress: f64) -> String {
    format!("scaleX({progress})")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(offset: f64) -> ScrollMetrics {
        ScrollMetrics {
            offset,
            scroll_height: 3_000.0,
            client_height: 1_000.0,
        }
    }

    #[test]
    fn scrolled_marker_is_strictly_above_threshold() {
        let chrome = ScrollChrome::new(50.0);
        assert!(!chrome.view(&at(0.0)).scrolled);
        assert!(!chrome.view(&at(50.0)).scrolled);
        assert!(chrome.view(&at(51.0)).scrolled);
        assert!(!chrome.view(&at(12.0)).scrolled);
    }

    #[test]
    fn progress_spans_zero_to_one() {
        assert_eq!(at(0.0).progress(), 0.0);
        assert_eq!(at(1_000.0).progress(), 0.5);
        assert_eq!(at(2_000.0).progress(), 1.0);
    }

    #[test]
    fn overscroll_is_clamped() {
        assert_eq!(at(-40.0).progress(), 0.0);
        assert_eq!(at(2_100.0).progress(), 1.0);
    }

    #[test]
    fn unscrollable_page_reports_zero() {
        let metrics = ScrollMetrics {
            offset: 0.0,
            scroll_height: 800.0,
            client_height: 800.0,
        };
        assert_eq!(metrics.progress(), 0.0);
    }

    #[test]
    fn transform_uses_scale_x() {
        assert_eq!(progress_transform(0.0), "scaleX(0)");
        assert_eq!(progress_transform(0.5), "scaleX(0.5)");
        assert_eq!(progress_transform(1.0), "scaleX(1)");
    }
}
