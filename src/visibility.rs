/// Default fraction of a section that must be on screen before its entrance animation plays.
pub const DEFAULT_THRESHOLD: f64 = 0.2;

/// One-shot visibility latch: false until the visible fraction first reaches
/// the threshold, then true for good.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityLatch {
    threshold: f64,
    visible: bool,
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds an observed intersection ratio. Returns true only on the latching observation.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.visible || ratio <= 0.0 || ratio < self.threshold {
            return false;
        }
        self.visible = true;
        true
    }

    /// Used when the environment cannot observe intersections at all.
    pub fn force(&mut self) {
        self.visible = true;
    }
}

impl Default for VisibilityLatch {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latches_once_threshold_crossed() {
        let mut latch = VisibilityLatch::new(0.2);
        assert!(!latch.observe(0.1));
        assert!(!latch.is_visible());
        assert!(latch.observe(0.25));
        assert!(latch.is_visible());
    }

    #[test]
    fn test_never_reverts() {
        let mut latch = VisibilityLatch::default();
        latch.observe(0.9);
        for ratio in [0.0, 0.05, 1.0, 0.0] {
            assert!(!latch.observe(ratio));
            assert!(latch.is_visible());
        }
    }

    #[test]
    fn test_zero_threshold_needs_some_intersection() {
        let mut latch = VisibilityLatch::new(0.0);
        assert!(!latch.observe(0.0));
        assert!(latch.observe(0.01));
    }

    #[test]
    fn test_force_for_unsupported_environments() {
        let mut latch = VisibilityLatch::new(0.5);
        latch.force();
        assert!(latch.is_visible());
    }
}
