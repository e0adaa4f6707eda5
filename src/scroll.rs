use crate::nav::SectionId;

/// Distance (px) from the viewport top used as the "reading line" for the active section.
pub const OFFSET_PX: f64 = 100.0;
/// Height (px) of the fixed header; click-to-scroll lands sections just below it.
pub const HEADER_HEIGHT: f64 = 80.0;

/// A section's bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    pub id: SectionId,
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    pub fn contains(&self, line: f64) -> bool {
        self.top <= line && self.bottom >= line
    }
}

/// First section, in the given order, whose box straddles `line`.
pub fn active_section(rects: &[SectionRect], line: f64) -> Option<SectionId> {
    rects.iter().find(|r| r.contains(line)).map(|r| r.id)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollTracker {
    offset: f64,
    active: Option<SectionId>,
    frozen: bool,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// `None` only until the first sample.
    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    /// While frozen, samples are ignored and the last offset and section stand.
    /// Used while the page is scroll-locked, when the window reports offset 0.
    pub fn set_frozen(&mut self, frozen: bool) {
        self.frozen = frozen;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Records a new sample. Returns true when the active section changed.
    ///
    /// When nothing straddles the reading line the previous section is kept,
    /// so the highlight does not flicker between sections. A first sample that
    /// matches nothing falls back to the first section.
    pub fn sample(&mut self, offset: f64, rects: &[SectionRect]) -> bool {
        if self.frozen {
            return false;
        }
        self.offset = offset.max(0.0);
        let next = active_section(rects, OFFSET_PX)
            .or(self.active)
            .or_else(|| rects.first().map(|r| r.id));
        let changed = next != self.active;
        self.active = next;
        changed
    }
}

/// Coalesces bursts of scroll/resize events into one recompute per animation frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns true if the caller should schedule a frame; false if one is already queued.
    pub fn request(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    pub fn on_frame(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// How a programmatic scroll moves the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMotion {
    Smooth,
    Instant,
}

impl ScrollMotion {
    /// Restoring the offset after a scroll lock lands in one step, ignoring the
    /// root's `scroll-behavior: smooth`.
    pub const RESTORE: Self = Self::Instant;

    /// Motion for click-to-scroll.
    pub fn for_navigation(smooth_supported: bool, reduce_motion: bool) -> Self {
        if smooth_supported && !reduce_motion {
            Self::Smooth
        } else {
            Self::Instant
        }
    }
}

/// Document offset to scroll to so an element at viewport `element_top` lands below the header.
pub fn scroll_target(element_top: f64, current_offset: f64, header_height: f64) -> f64 {
    (current_offset + element_top - header_height).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Sections stacked top to bottom, each `height` tall, viewed at `offset`.
    fn layout(offset: f64, height: f64) -> Vec<SectionRect> {
        SectionId::ALL
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let top = i as f64 * height - offset;
                SectionRect {
                    id: *id,
                    top,
                    bottom: top + height,
                }
            })
            .collect()
    }

    #[test]
    fn test_viewport_inside_about() {
        let mut tracker = ScrollTracker::new();
        assert_eq!(tracker.active(), None);
        tracker.sample(900.0, &layout(900.0, 800.0));
        assert_eq!(tracker.active(), Some(SectionId::About));
        assert_eq!(tracker.offset(), 900.0);
    }

    #[test]
    fn test_first_match_in_declared_order_wins() {
        // Home ends exactly where About begins, both touch the line
        let rects = vec![
            SectionRect {
                id: SectionId::Home,
                top: -700.0,
                bottom: OFFSET_PX,
            },
            SectionRect {
                id: SectionId::About,
                top: OFFSET_PX,
                bottom: 900.0,
            },
        ];
        assert_eq!(active_section(&rects, OFFSET_PX), Some(SectionId::Home));
    }

    #[test]
    fn test_gap_retains_previous_section() {
        let mut tracker = ScrollTracker::new();
        tracker.sample(900.0, &layout(900.0, 800.0));
        assert_eq!(tracker.active(), Some(SectionId::About));

        // A gap between sections straddles the reading line
        let gap = vec![
            SectionRect {
                id: SectionId::About,
                top: -700.0,
                bottom: 50.0,
            },
            SectionRect {
                id: SectionId::Work,
                top: 150.0,
                bottom: 950.0,
            },
        ];
        let changed = tracker.sample(1600.0, &gap);
        assert!(!changed);
        assert_eq!(tracker.active(), Some(SectionId::About));
    }

    #[test]
    fn test_first_sample_never_leaves_active_empty() {
        let mut tracker = ScrollTracker::new();
        let below = vec![SectionRect {
            id: SectionId::Home,
            top: 300.0,
            bottom: 900.0,
        }];
        assert!(tracker.sample(0.0, &below));
        assert_eq!(tracker.active(), Some(SectionId::Home));
    }

    #[test]
    fn test_sample_reports_changes() {
        let mut tracker = ScrollTracker::new();
        assert!(tracker.sample(0.0, &layout(0.0, 800.0)));
        assert!(!tracker.sample(10.0, &layout(10.0, 800.0)));
        assert!(tracker.sample(2500.0, &layout(2500.0, 800.0)));
        assert_eq!(tracker.active(), Some(SectionId::Contact));
    }

    #[test]
    fn test_frame_gate_coalesces_bursts() {
        let mut gate = FrameGate::default();
        let scheduled = (0..10).filter(|_| gate.request()).count();
        assert_eq!(scheduled, 1);
        assert!(gate.is_pending());

        gate.on_frame();
        assert!(!gate.is_pending());
        assert!(gate.request());
    }

    #[test]
    fn test_scroll_target_subtracts_header() {
        assert_eq!(scroll_target(500.0, 1000.0, HEADER_HEIGHT), 1420.0);
        assert_eq!(scroll_target(-200.0, 1000.0, HEADER_HEIGHT), 720.0);
        assert_eq!(scroll_target(10.0, 0.0, HEADER_HEIGHT), 0.0);
    }

    #[test]
    fn test_frozen_tracker_ignores_locked_page_samples() {
        let mut tracker = ScrollTracker::new();
        tracker.sample(900.0, &layout(900.0, 800.0));

        // a pinned body reports offset 0 and puts Home under the reading line
        tracker.set_frozen(true);
        assert!(!tracker.sample(0.0, &layout(0.0, 800.0)));
        assert_eq!(tracker.offset(), 900.0);
        assert_eq!(tracker.active(), Some(SectionId::About));

        tracker.set_frozen(false);
        tracker.sample(900.0, &layout(900.0, 800.0));
        assert_eq!(tracker.offset(), 900.0);
        assert_eq!(tracker.active(), Some(SectionId::About));
    }

    #[test]
    fn test_navigation_motion() {
        assert_eq!(ScrollMotion::for_navigation(true, false), ScrollMotion::Smooth);
        assert_eq!(ScrollMotion::for_navigation(false, false), ScrollMotion::Instant);
        assert_eq!(ScrollMotion::for_navigation(true, true), ScrollMotion::Instant);
        assert_eq!(ScrollMotion::RESTORE, ScrollMotion::Instant);
    }
}
