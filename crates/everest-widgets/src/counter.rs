#![forbid(unsafe_code)]

//! Animated statistics counter state.
//!
//! When a stat tile is revealed, its number counts up from zero to the
//! target over a fixed duration. [`CountUp`] is the pure ramp, queried with
//! the elapsed time from whatever frame clock the host runs, and
//! [`format_stat`] renders a value with the magnitude-dependent suffix the
//! stat tiles use (`2.5K+`, `98%`, `15+`).

use std::time::Duration;

/// Linear count-up ramp from zero to a target value.
#[derive(Debug, Clone, Copy)]
pub struct CountUp {
    target: u64,
    duration: Duration,
}

impl CountUp {
    /// Stock animation length.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(2000);

    /// Create a ramp to `target` over the stock duration.
    #[must_use]
    pub fn new(target: u64) -> Self {
        Self::with_duration(target, Self::DEFAULT_DURATION)
    }

    /// Create a ramp to `target` over a custom duration.
    ///
    /// A zero duration snaps straight to the target.
    #[must_use]
    pub fn with_duration(target: u64, duration: Duration) -> Self {
        Self { target, duration }
    }

    /// Value of the ramp `elapsed` after the start, saturating at the
    /// target.
    #[must_use]
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.target;
        }
        let progress = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        (self.target as f64 * progress).floor() as u64
    }

    /// Whether the ramp has reached its target.
    #[must_use]
    pub fn is_done(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    /// The ramp's target value.
    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }
}

/// Render a stat value with the suffix its magnitude class uses.
///
/// The class is decided by the *target*, not the in-flight value, so a tile
/// keeps one suffix for the whole animation: targets ≥ 1000 render as
/// thousands with one decimal (`2.5K+`), targets ≥ 100 as percentages
/// (`98%`), smaller targets with a bare plus (`15+`).
#[must_use]
pub fn format_stat(value: u64, target: u64) -> String {
    if target >= 1000 {
        format!("{:.1}K+", value as f64 / 1000.0)
    } else if target >= 100 {
        format!("{value}%")
    } else {
        format!("{value}+")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn starts_at_zero() {
        let ramp = CountUp::new(500);
        assert_eq!(ramp.value_at(Duration::ZERO), 0);
        assert!(!ramp.is_done(Duration::ZERO));
    }

    #[test]
    fn reaches_target_at_duration() {
        let ramp = CountUp::new(500);
        assert_eq!(ramp.value_at(ms(2000)), 500);
        assert!(ramp.is_done(ms(2000)));
    }

    #[test]
    fn saturates_past_duration() {
        let ramp = CountUp::new(500);
        assert_eq!(ramp.value_at(ms(10_000)), 500);
    }

    #[test]
    fn ramp_is_linear() {
        let ramp = CountUp::with_duration(1000, ms(2000));
        assert_eq!(ramp.value_at(ms(500)), 250);
        assert_eq!(ramp.value_at(ms(1000)), 500);
        assert_eq!(ramp.value_at(ms(1500)), 750);
    }

    #[test]
    fn ramp_is_monotonic() {
        let ramp = CountUp::new(777);
        let mut last = 0;
        for step in 0..=40 {
            let value = ramp.value_at(ms(step * 50));
            assert!(value >= last, "ramp went backwards at step {step}");
            last = value;
        }
        assert_eq!(last, 777);
    }

    #[test]
    fn zero_duration_snaps() {
        let ramp = CountUp::with_duration(42, Duration::ZERO);
        assert_eq!(ramp.value_at(Duration::ZERO), 42);
        assert!(ramp.is_done(Duration::ZERO));
    }

    #[test]
    fn zero_target_stays_zero() {
        let ramp = CountUp::new(0);
        assert_eq!(ramp.value_at(ms(1000)), 0);
    }

    #[test]
    fn format_thousands() {
        assert_eq!(format_stat(2500, 2500), "2.5K+");
        assert_eq!(format_stat(1000, 1000), "1.0K+");
        // Mid-animation values keep the target's class.
        assert_eq!(format_stat(500, 2500), "0.5K+");
    }

    #[test]
    fn format_percent() {
        assert_eq!(format_stat(98, 98), "98%");
        assert_eq!(format_stat(100, 100), "100%");
        assert_eq!(format_stat(0, 150), "0%");
    }

    #[test]
    fn format_small() {
        assert_eq!(format_stat(15, 15), "15+");
        assert_eq!(format_stat(0, 99), "0+");
    }
}
