/// Pixels trimmed from every side of the viewport before testing intersection.
pub const REVEAL_INSET: f64 = 100.0;

/// Axis-aligned box in viewport coordinates, as reported by
/// `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn viewport(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Shrinks the box by `by` on every side. A box smaller than twice the
    /// inset collapses to zero size around its center.
    pub fn inset(&self, by: f64) -> Self {
        let width = (self.width - 2.0 * by).max(0.0);
        let height = (self.height - 2.0 * by).max(0.0);
        Self {
            left: self.left + (self.width - width) / 2.0,
            top: self.top + (self.height - height) / 2.0,
            width,
            height,
        }
    }

    /// True when the two boxes share a region of positive area.
    pub fn intersects(&self, other: &Rect) -> bool {
        let left = self.left.max(other.left);
        let right = self.right().min(other.right());
        let top = self.top.max(other.top);
        let bottom = self.bottom().min(other.bottom());
        left < right && top < bottom
    }
}

/// One-shot latch deciding when a region's entrance animation plays.
///
/// `revealed` is written once. Later observations, intersecting or not, leave
/// it untouched so the animation never replays when the scroll direction
/// changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealController {
    inset: f64,
    revealed: bool,
}

impl Default for RevealController {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealController {
    pub fn new() -> Self {
        Self::with_inset(REVEAL_INSET)
    }

    pub fn with_inset(inset: f64) -> Self {
        Self {
            inset: inset.max(0.0),
            revealed: false,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn inset(&self) -> f64 {
        self.inset
    }

    /// `rootMargin` value for an `IntersectionObserver` that applies the same
    /// inset as [`RevealController::observe_geometry`].
    pub fn root_margin(&self) -> String {
        if self.inset == 0.0 {
            "0px".to_string()
        } else {
            format!("-{}px", self.inset)
        }
    }

    /// Feeds an intersection result computed by the host, which has already
    /// applied [`RevealController::root_margin`]. Returns true only on the
    /// call that flips the latch.
    pub fn observe_intersection(&mut self, is_intersecting: bool) -> bool {
        if self.revealed || !is_intersecting {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Tests `region` against `viewport` shrunk by the inset. Used for the
    /// check at mount, before any intersection event has been delivered.
    pub fn observe_geometry(&mut self, region: Rect, viewport: Rect) -> bool {
        let effective = viewport.inset(self.inset);
        self.observe_intersection(region.intersects(&effective))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect {
        left: 0.0,
        top: 0.0,
        width: 1280.0,
        height: 800.0,
    };

    #[test]
    fn test_inset_shrinks_every_side() {
        let r = VIEWPORT.inset(100.0);
        assert_eq!(r, Rect::new(100.0, 100.0, 1080.0, 600.0));
        assert_eq!(r.bottom(), 700.0);
        assert_eq!(r.right(), 1180.0);
    }

    #[test]
    fn test_inset_collapses_small_boxes() {
        let r = Rect::new(0.0, 0.0, 150.0, 120.0).inset(100.0);
        assert_eq!(r.width, 0.0);
        assert_eq!(r.height, 0.0);
        assert_eq!(r.left, 75.0);
        assert_eq!(r.top, 60.0);
        assert!(!r.intersects(&VIEWPORT));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(0.0, 100.0, 100.0, 100.0);
        assert!(!a.intersects(&b));
        assert!(a.intersects(&Rect::new(0.0, 99.0, 100.0, 100.0)));
    }

    #[test]
    fn test_region_on_screen_at_mount_reveals_immediately() {
        let mut controller = RevealController::new();
        let hero = Rect::new(0.0, 0.0, 1280.0, 800.0);
        assert!(controller.observe_geometry(hero, VIEWPORT));
        assert!(controller.is_revealed());
    }

    #[test]
    fn test_region_inside_inset_band_stays_hidden() {
        let mut controller = RevealController::new();
        // peeks 60px above the bottom edge, inside the 100px margin
        let section = Rect::new(0.0, 740.0, 1280.0, 900.0);
        assert!(!controller.observe_geometry(section, VIEWPORT));
        assert!(!controller.is_revealed());

        // scrolled further: now 150px above the bottom edge
        let section = Rect::new(0.0, 650.0, 1280.0, 900.0);
        assert!(controller.observe_geometry(section, VIEWPORT));
        assert!(controller.is_revealed());
    }

    #[test]
    fn test_latch_never_resets() {
        let mut controller = RevealController::new();
        assert!(controller.observe_intersection(true));
        assert!(!controller.observe_intersection(false));
        assert!(controller.is_revealed());
        // a second qualifying intersection does not report a new flip
        assert!(!controller.observe_intersection(true));
        let off_screen = Rect::new(0.0, -5000.0, 1280.0, 400.0);
        assert!(!controller.observe_geometry(off_screen, VIEWPORT));
        assert!(controller.is_revealed());
    }

    #[test]
    fn test_controllers_are_independent() {
        let mut about = RevealController::new();
        let mut contact = RevealController::new();
        let about_rect = Rect::new(0.0, 200.0, 1280.0, 400.0);
        let contact_rect = Rect::new(0.0, 3000.0, 1280.0, 400.0);

        about.observe_geometry(about_rect, VIEWPORT);
        contact.observe_geometry(contact_rect, VIEWPORT);
        assert!(about.is_revealed());
        assert!(!contact.is_revealed());
    }

    #[test]
    fn test_root_margin_matches_inset() {
        assert_eq!(RevealController::new().root_margin(), "-100px");
        assert_eq!(RevealController::with_inset(24.0).root_margin(), "-24px");
        assert_eq!(RevealController::with_inset(-5.0).inset(), 0.0);
        assert_eq!(RevealController::with_inset(0.0).root_margin(), "0px");
    }

    #[test]
    fn test_zero_inset_reveals_at_the_viewport_edge() {
        // bottom 40px of the viewport, inside the default inset band
        let region = Rect::new(0.0, 760.0, 400.0, 200.0);
        let mut inset = RevealController::new();
        let mut edge = RevealController::with_inset(0.0);
        assert!(!inset.observe_geometry(region, VIEWPORT));
        assert!(edge.observe_geometry(region, VIEWPORT));
    }
}
