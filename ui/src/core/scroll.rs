//! Scroll-driven header state.
//!
//! The fixed header has two independent visual states:
//! - `scrolled`: the page has moved away from the very top (adds a backdrop).
//! - `hidden`: the user is scrolling *down* past the hide distance, so the
//!   header slides out of the way. Any upward (or zero) movement shows it again.
//!
//! There is no smoothing or debounce: every sample is applied as-is, so rapid
//! direction reversals flip `hidden` immediately.

/// Offset (px) past which the header counts as scrolled.
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0;

/// Offset (px) past which downward scrolling hides the header.
pub const HIDE_THRESHOLD_PX: f64 = 100.0;

/// The two flags rendered on the header.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HeaderFlags {
    pub scrolled: bool,
    pub hidden: bool,
}

/// Running scroll state for one mounted header.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    /// Offset of the previous sample (0 before the first one, i.e. page top).
    pub last_position_px: f64,
    pub is_scrolled: bool,
    pub is_hidden: bool,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one scroll sample (`y` = pixels from the top of the document).
    pub fn observe(&mut self, y: f64) -> HeaderFlags {
        self.is_scrolled = y > SCROLLED_THRESHOLD_PX;
        self.is_hidden = y > self.last_position_px && y > HIDE_THRESHOLD_PX;
        self.last_position_px = y;
        self.flags()
    }

    pub fn flags(&self) -> HeaderFlags {
        HeaderFlags {
            scrolled: self.is_scrolled,
            hidden: self.is_hidden,
        }
    }
}

/// Class list for the `<header>` element, e.g. `"header scrolled hidden"`.
pub fn header_class(flags: HeaderFlags) -> String {
    let mut class = String::from("header");
    if flags.scrolled {
        class.push_str(" scrolled");
    }
    if flags.hidden {
        class.push_str(" hidden");
    }
    class
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(samples: &[f64]) -> Vec<(bool, bool)> {
        let mut tracker = ScrollTracker::new();
        samples
            .iter()
            .map(|y| {
                let f = tracker.observe(*y);
                (f.scrolled, f.hidden)
            })
            .collect()
    }

    #[test]
    fn mixed_scroll_sequence() {
        assert_eq!(
            run(&[0.0, 30.0, 80.0, 120.0, 90.0]),
            vec![
                (false, false),
                (false, false),
                (true, false),
                (true, true),
                (true, false),
            ]
        );
    }

    #[test]
    fn stays_unscrolled_up_to_threshold() {
        let mut tracker = ScrollTracker::new();
        for y in [0.0, 10.0, 49.9, 50.0] {
            assert!(!tracker.observe(y).scrolled, "y={y}");
        }
        assert!(tracker.observe(50.5).scrolled);
    }

    #[test]
    fn monotonic_descent_past_hide_distance_hides() {
        let mut tracker = ScrollTracker::new();
        tracker.observe(90.0);
        for y in [101.0, 150.0, 400.0, 1200.0] {
            assert!(tracker.observe(y).hidden, "y={y}");
        }
    }

    #[test]
    fn first_sample_compares_against_page_top() {
        let mut tracker = ScrollTracker::new();
        // Page restored mid-document: the first sample is already "downward".
        let flags = tracker.observe(640.0);
        assert_eq!(
            flags,
            HeaderFlags {
                scrolled: true,
                hidden: true
            }
        );
    }

    #[test]
    fn repeated_offset_shows_header() {
        let mut tracker = ScrollTracker::new();
        tracker.observe(300.0);
        let first = tracker.observe(500.0);
        let second = tracker.observe(500.0);
        assert!(first.hidden);
        assert!(second.scrolled);
        assert!(!second.hidden);
    }

    #[test]
    fn upward_or_shallow_movement_never_hides() {
        let mut tracker = ScrollTracker::new();
        tracker.observe(800.0);
        assert!(!tracker.observe(700.0).hidden);
        assert!(!tracker.observe(20.0).hidden);
        // Downward but still above the hide distance.
        assert!(!tracker.observe(100.0).hidden);
    }

    #[test]
    fn reversal_flips_immediately() {
        let mut tracker = ScrollTracker::new();
        tracker.observe(200.0);
        assert!(tracker.observe(210.0).hidden);
        assert!(!tracker.observe(209.0).hidden);
        assert!(tracker.observe(211.0).hidden);
    }

    #[test]
    fn header_class_composition() {
        assert_eq!(header_class(HeaderFlags::default()), "header");
        assert_eq!(
            header_class(HeaderFlags {
                scrolled: true,
                hidden: false
            }),
            "header scrolled"
        );
        assert_eq!(
            header_class(HeaderFlags {
                scrolled: true,
                hidden: true
            }),
            "header scrolled hidden"
        );
    }
}
