/// Offset in pixels past which the "scroll to top" button is shown.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Raw measurements taken from the document on a scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(offset: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            document_height,
            viewport_height,
        }
    }

    /// Distance the document can actually travel. Never negative.
    pub fn scrollable_height(&self) -> f64 {
        let h = self.document_height - self.viewport_height;
        if h.is_finite() {
            h.max(0.0)
        } else {
            0.0
        }
    }
}

/// Derived scroll state handed to the view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub raw_offset: f64,
    pub progress: f64,
    pub past_threshold: bool,
}

impl ScrollState {
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_past_threshold(&self) -> bool {
        self.past_threshold
    }
}

/// Normalized scroll completion in `[0, 1]`.
///
/// A document that cannot scroll has no progress, so a zero denominator maps
/// to 0 rather than dividing.
pub fn progress(offset: f64, scrollable_height: f64) -> f64 {
    if scrollable_height.is_nan() || scrollable_height <= 0.0 || !offset.is_finite() {
        return 0.0;
    }
    (offset / scrollable_height).clamp(0.0, 1.0)
}

/// Turns scroll measurements into a [`ScrollState`].
///
/// The tracker itself holds no per-event state; the view keeps the last
/// [`ScrollState`] in a memo so that renders only happen when it changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    threshold: f64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::with_threshold(SCROLL_TOP_THRESHOLD)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn measure(&self, metrics: ScrollMetrics) -> ScrollState {
        // overscroll bounce reports negative offsets
        let raw_offset = if metrics.offset.is_finite() {
            metrics.offset.max(0.0)
        } else {
            0.0
        };
        ScrollState {
            raw_offset,
            progress: progress(raw_offset, metrics.scrollable_height()),
            past_threshold: raw_offset > self.threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(offset: f64, document_height: f64, viewport_height: f64) -> ScrollState {
        ScrollTracker::new().measure(ScrollMetrics::new(
            offset,
            document_height,
            viewport_height,
        ))
    }

    #[test]
    fn test_progress_is_offset_over_scrollable_height() {
        let state = measure(500.0, 3000.0, 1000.0);
        assert_eq!(state.progress(), 0.25);
        assert_eq!(state.raw_offset, 500.0);

        let state = measure(2000.0, 3000.0, 1000.0);
        assert_eq!(state.progress(), 1.0);
    }

    #[test]
    fn test_progress_clamps_past_bottom() {
        // elastic scrolling can overshoot the real maximum
        let state = measure(2400.0, 3000.0, 1000.0);
        assert_eq!(state.progress(), 1.0);
    }

    #[test]
    fn test_zero_scrollable_height_has_no_progress() {
        let state = measure(0.0, 800.0, 800.0);
        assert_eq!(state.progress(), 0.0);

        // viewport taller than the document
        let state = measure(40.0, 600.0, 900.0);
        assert_eq!(state.progress(), 0.0);
        assert!(!state.progress().is_nan());
    }

    #[test]
    fn test_threshold_boundary_is_exclusive() {
        assert!(!measure(300.0, 5000.0, 800.0).is_past_threshold());
        assert!(measure(300.5, 5000.0, 800.0).is_past_threshold());
        assert!(!measure(0.0, 5000.0, 800.0).is_past_threshold());
    }

    #[test]
    fn test_negative_and_non_finite_offsets_degrade_to_top() {
        let state = measure(-35.0, 5000.0, 800.0);
        assert_eq!(state, ScrollState::default());

        let state = measure(f64::NAN, 5000.0, 800.0);
        assert_eq!(state.raw_offset, 0.0);
        assert_eq!(state.progress(), 0.0);

        let state = measure(100.0, f64::INFINITY, 800.0);
        assert_eq!(state.progress(), 0.0);
    }

    #[test]
    fn test_custom_threshold() {
        let tracker = ScrollTracker::with_threshold(50.0);
        let state = tracker.measure(ScrollMetrics::new(51.0, 1000.0, 500.0));
        assert!(state.is_past_threshold());
        assert!(!tracker.measure(ScrollMetrics::new(50.0, 1000.0, 500.0)).is_past_threshold());
    }
}
