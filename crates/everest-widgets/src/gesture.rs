#![forbid(unsafe_code)]

//! Swipe gesture interpretation.
//!
//! A [`SwipeTracker`] turns a pointer-down/move/up triad into a discrete
//! navigation decision. It is the only cross-callback state in the system:
//! the start position and tracking flag live across the three callbacks and
//! are always cleared on [`on_end`](SwipeTracker::on_end), whatever the
//! outcome.
//!
//! # Decision rule
//!
//! With `dx = start.x − end.x` and `dy = start.y − end.y`, a gesture is
//! directional only when it is predominantly horizontal (`|dx| > |dy|`) and
//! longer than the distance threshold. `dx > 0` (drag to the left) means
//! [`SwipeDecision::Advance`]; `dx < 0` means [`SwipeDecision::Retreat`];
//! everything else is [`SwipeDecision::None`].

use everest_core::geometry::Point;

/// Configuration for swipe detection.
#[derive(Debug, Clone)]
pub struct SwipeConfig {
    /// Minimum horizontal travel in device-independent pixels before a
    /// gesture counts as directional (default: 50).
    pub min_distance: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self { min_distance: 50.0 }
    }
}

impl SwipeConfig {
    /// Create a config with a custom distance threshold.
    #[must_use]
    pub fn with_min_distance(mut self, px: f32) -> Self {
        self.min_distance = px;
        self
    }
}

/// Outcome of a completed gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDecision {
    /// Page forward (the user dragged the track to the left).
    Advance,
    /// Page backward.
    Retreat,
    /// Not a directional gesture.
    None,
}

/// Idle → Tracking → Idle interpreter for pointer gestures.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    config: SwipeConfig,
    start: Option<Point>,
}

impl SwipeTracker {
    /// Create a tracker with the default threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tracker with a custom configuration.
    #[must_use]
    pub fn with_config(config: SwipeConfig) -> Self {
        Self {
            config,
            start: None,
        }
    }

    /// Pointer went down: start tracking from `(x, y)`.
    ///
    /// A second start while already tracking restarts the gesture from the
    /// new point.
    pub fn on_start(&mut self, x: f32, y: f32) {
        self.start = Some(Point::new(x, y));
    }

    /// Pointer moved while held.
    ///
    /// Returns whether the host should suppress the surface's default
    /// scroll/selection handling: true exactly while tracking. The tracker
    /// itself only signals; inhibiting the default is the host's job.
    #[must_use]
    pub fn on_move(&self) -> bool {
        self.start.is_some()
    }

    /// Pointer released at `(x, y)`: resolve the gesture.
    ///
    /// Always returns the tracker to idle. Calling without a matching
    /// [`on_start`](Self::on_start) is a no-op yielding
    /// [`SwipeDecision::None`].
    pub fn on_end(&mut self, x: f32, y: f32) -> SwipeDecision {
        let Some(start) = self.start.take() else {
            return SwipeDecision::None;
        };

        let dx = start.x - x;
        let dy = start.y - y;

        if dx.abs() > dy.abs() && dx.abs() > self.config.min_distance {
            if dx > 0.0 {
                SwipeDecision::Advance
            } else {
                SwipeDecision::Retreat
            }
        } else {
            SwipeDecision::None
        }
    }

    /// Abandon the current gesture, if any.
    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Whether a gesture is in flight.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_by_default() {
        let tracker = SwipeTracker::new();
        assert!(!tracker.is_tracking());
        assert!(!tracker.on_move());
    }

    #[test]
    fn horizontal_left_drag_advances() {
        let mut tracker = SwipeTracker::new();
        tracker.on_start(100.0, 100.0);
        assert!(tracker.on_move());
        // dx = 60, dy = -5: horizontal-dominant, past threshold.
        assert_eq!(tracker.on_end(40.0, 105.0), SwipeDecision::Advance);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn horizontal_right_drag_retreats() {
        let mut tracker = SwipeTracker::new();
        tracker.on_start(40.0, 100.0);
        assert_eq!(tracker.on_end(120.0, 98.0), SwipeDecision::Retreat);
    }

    #[test]
    fn vertical_drag_is_ignored() {
        let mut tracker = SwipeTracker::new();
        tracker.on_start(100.0, 100.0);
        // dx = 0, dy = -40: vertical-dominant.
        assert_eq!(tracker.on_end(100.0, 140.0), SwipeDecision::None);
    }

    #[test]
    fn short_drag_is_ignored() {
        let mut tracker = SwipeTracker::new();
        tracker.on_start(100.0, 100.0);
        // dx = 50 is not strictly past the 50px threshold.
        assert_eq!(tracker.on_end(50.0, 100.0), SwipeDecision::None);
    }

    #[test]
    fn diagonal_mostly_vertical_is_ignored() {
        let mut tracker = SwipeTracker::new();
        tracker.on_start(100.0, 100.0);
        // |dx| = 60 but |dy| = 80 dominates.
        assert_eq!(tracker.on_end(40.0, 180.0), SwipeDecision::None);
    }

    #[test]
    fn end_without_start_is_noop() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.on_end(0.0, 0.0), SwipeDecision::None);
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn end_always_returns_to_idle() {
        let mut tracker = SwipeTracker::new();
        tracker.on_start(100.0, 100.0);
        let _ = tracker.on_end(100.0, 140.0);
        assert!(!tracker.is_tracking());
        // A fresh end after the reset is still a no-op.
        assert_eq!(tracker.on_end(0.0, 100.0), SwipeDecision::None);
    }

    #[test]
    fn restart_overwrites_start_point() {
        let mut tracker = SwipeTracker::new();
        tracker.on_start(500.0, 100.0);
        tracker.on_start(100.0, 100.0);
        // Measured from the second start: dx = 60.
        assert_eq!(tracker.on_end(40.0, 100.0), SwipeDecision::Advance);
    }

    #[test]
    fn custom_threshold_applies() {
        let mut tracker = SwipeTracker::with_config(SwipeConfig::default().with_min_distance(10.0));
        tracker.on_start(100.0, 100.0);
        assert_eq!(tracker.on_end(80.0, 100.0), SwipeDecision::Advance);
    }

    #[test]
    fn cancel_discards_gesture() {
        let mut tracker = SwipeTracker::new();
        tracker.on_start(100.0, 100.0);
        tracker.cancel();
        assert!(!tracker.is_tracking());
        assert_eq!(tracker.on_end(0.0, 100.0), SwipeDecision::None);
    }
}
