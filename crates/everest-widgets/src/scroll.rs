#![forbid(unsafe_code)]

//! Scroll-position effects.
//!
//! Two threshold effects hang off the document scroll position: the header
//! gains a "raised" treatment once the page has scrolled past a small
//! offset, and the scroll-to-top control becomes visible further down.
//! Scroll signals stream on every frame, so each effect throttles its own
//! updates; the sink hears only actual transitions.

use std::time::{Duration, Instant};

use everest_core::rate_limit::Throttle;

/// Scroll offsets (pixels from the top) at which the effects switch on.
#[derive(Debug, Clone)]
pub struct ScrollThresholds {
    /// Header switches to its raised treatment past this offset
    /// (default: 50).
    pub header_raised: f32,
    /// Scroll-to-top control becomes visible past this offset
    /// (default: 300).
    pub to_top_visible: f32,
}

impl Default for ScrollThresholds {
    fn default() -> Self {
        Self {
            header_raised: 50.0,
            to_top_visible: 300.0,
        }
    }
}

/// Render sink for scroll effects.
pub trait ScrollSurface {
    /// The header crossed the raised threshold.
    fn set_header_raised(&mut self, raised: bool);

    /// The scroll-to-top control crossed the visibility threshold.
    fn set_to_top_visible(&mut self, visible: bool);
}

/// Threshold-based scroll effect state.
#[derive(Debug, Clone)]
pub struct ScrollEffects {
    thresholds: ScrollThresholds,
    header_raised: bool,
    to_top_visible: bool,
    header_throttle: Throttle,
    to_top_throttle: Throttle,
}

impl Default for ScrollEffects {
    fn default() -> Self {
        Self::new(ScrollThresholds::default())
    }
}

impl ScrollEffects {
    /// Create scroll effects with the given thresholds and the stock
    /// throttle intervals (10 ms for the header, 100 ms for scroll-to-top).
    #[must_use]
    pub fn new(thresholds: ScrollThresholds) -> Self {
        Self {
            thresholds,
            header_raised: false,
            to_top_visible: false,
            header_throttle: Throttle::new(Duration::from_millis(10)),
            to_top_throttle: Throttle::new(Duration::from_millis(100)),
        }
    }

    /// Feed a scroll position. Each effect re-evaluates at most once per
    /// its throttle interval and notifies the sink only on a transition.
    pub fn on_scroll<S: ScrollSurface>(&mut self, y: f32, now: Instant, surface: &mut S) {
        if self.header_throttle.allow(now) {
            let raised = y > self.thresholds.header_raised;
            if raised != self.header_raised {
                self.header_raised = raised;
                surface.set_header_raised(raised);
            }
        }
        if self.to_top_throttle.allow(now) {
            let visible = y > self.thresholds.to_top_visible;
            if visible != self.to_top_visible {
                self.to_top_visible = visible;
                surface.set_to_top_visible(visible);
            }
        }
    }

    /// Whether the header is currently raised.
    #[must_use]
    pub fn header_raised(&self) -> bool {
        self.header_raised
    }

    /// Whether the scroll-to-top control is currently visible.
    #[must_use]
    pub fn to_top_visible(&self) -> bool {
        self.to_top_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        header: Vec<bool>,
        to_top: Vec<bool>,
    }

    impl ScrollSurface for Recorder {
        fn set_header_raised(&mut self, raised: bool) {
            self.header.push(raised);
        }

        fn set_to_top_visible(&mut self, visible: bool) {
            self.to_top.push(visible);
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn starts_lowered_and_hidden() {
        let effects = ScrollEffects::default();
        assert!(!effects.header_raised());
        assert!(!effects.to_top_visible());
    }

    #[test]
    fn crossing_header_threshold_raises_once() {
        let mut surface = Recorder::default();
        let mut effects = ScrollEffects::default();
        let t0 = Instant::now();

        effects.on_scroll(10.0, t0, &mut surface);
        effects.on_scroll(80.0, t0 + ms(20), &mut surface);
        effects.on_scroll(120.0, t0 + ms(40), &mut surface);

        assert!(effects.header_raised());
        assert_eq!(surface.header, vec![true]);
    }

    #[test]
    fn returning_above_threshold_lowers() {
        let mut surface = Recorder::default();
        let mut effects = ScrollEffects::default();
        let t0 = Instant::now();

        effects.on_scroll(80.0, t0, &mut surface);
        effects.on_scroll(20.0, t0 + ms(20), &mut surface);
        assert_eq!(surface.header, vec![true, false]);
    }

    #[test]
    fn to_top_threshold_is_independent() {
        let mut surface = Recorder::default();
        let mut effects = ScrollEffects::default();
        let t0 = Instant::now();

        effects.on_scroll(200.0, t0, &mut surface);
        assert!(effects.header_raised());
        assert!(!effects.to_top_visible());

        effects.on_scroll(400.0, t0 + ms(200), &mut surface);
        assert!(effects.to_top_visible());
        assert_eq!(surface.to_top, vec![true]);
    }

    #[test]
    fn to_top_updates_are_throttled() {
        let mut surface = Recorder::default();
        let mut effects = ScrollEffects::default();
        let t0 = Instant::now();

        // Crossing at t0, crossing back 10ms later: the second evaluation is
        // inside the 100ms cooldown and is dropped.
        effects.on_scroll(400.0, t0, &mut surface);
        effects.on_scroll(0.0, t0 + ms(10), &mut surface);
        assert_eq!(surface.to_top, vec![true]);
        assert!(effects.to_top_visible());

        // After the cooldown the next signal lands.
        effects.on_scroll(0.0, t0 + ms(110), &mut surface);
        assert_eq!(surface.to_top, vec![true, false]);
    }

    #[test]
    fn exact_threshold_is_not_past() {
        let mut surface = Recorder::default();
        let mut effects = ScrollEffects::default();
        let t0 = Instant::now();

        effects.on_scroll(50.0, t0, &mut surface);
        assert!(!effects.header_raised());
        effects.on_scroll(50.1, t0 + ms(20), &mut surface);
        assert!(effects.header_raised());
    }

    #[test]
    fn custom_thresholds() {
        let mut surface = Recorder::default();
        let mut effects = ScrollEffects::new(ScrollThresholds {
            header_raised: 10.0,
            to_top_visible: 20.0,
        });
        let t0 = Instant::now();

        effects.on_scroll(15.0, t0, &mut surface);
        assert!(effects.header_raised());
        assert!(!effects.to_top_visible());
    }
}
