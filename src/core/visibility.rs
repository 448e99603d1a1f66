//! Fade-in reveal rules

/// Class marking elements that fade in when scrolled into view
pub const FADE_IN_CLASS: &str = "fade-in";

/// Class added once an element has been revealed
pub const VISIBLE_CLASS: &str = "visible";

/// Share of an element that must be in view before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Browsers report ratios at the threshold with rounding noise
const RATIO_TOLERANCE: f64 = 1e-3;

/// One-way visibility flag of an observed element.
///
/// Once revealed it stays revealed, whatever the element does afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealLatch {
    #[default]
    Hidden,
    Visible,
}

impl RevealLatch {
    /// Feed one intersection observation.
    ///
    /// Returns true when this observation is the one that reveals the element.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if *self == RevealLatch::Visible {
            return false;
        }
        if crosses_threshold(is_intersecting, ratio) {
            *self = RevealLatch::Visible;
            return true;
        }
        false
    }

    pub fn is_visible(&self) -> bool {
        *self == RevealLatch::Visible
    }
}

/// Whether an observation counts as "in view"
pub fn crosses_threshold(is_intersecting: bool, ratio: f64) -> bool {
    is_intersecting && ratio + RATIO_TOLERANCE >= REVEAL_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_at_threshold() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(true, 0.05));
        assert!(!latch.is_visible());

        assert!(latch.observe(true, 0.1));
        assert!(latch.is_visible());
    }

    #[test]
    fn test_stays_visible_after_leaving_viewport() {
        let mut latch = RevealLatch::default();
        latch.observe(true, 0.6);

        assert!(!latch.observe(false, 0.0));
        assert!(latch.is_visible());
        assert!(!latch.observe(true, 1.0));
        assert!(latch.is_visible());
    }

    #[test]
    fn test_not_intersecting_never_reveals() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false, 0.5));
        assert_eq!(latch, RevealLatch::Hidden);
    }

    #[test]
    fn test_crosses_threshold() {
        assert!(crosses_threshold(true, 1.0));
        assert!(crosses_threshold(true, REVEAL_THRESHOLD));
        assert!(crosses_threshold(true, 0.0999));
        assert!(!crosses_threshold(true, 0.09));
        assert!(!crosses_threshold(false, 1.0));
    }
}
