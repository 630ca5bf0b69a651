#![forbid(unsafe_code)]

//! Rate limiting for high-frequency input signals.
//!
//! Hosts can deliver input bursts far faster than the widget controllers
//! want to react: a window resize fires dozens of times per second while
//! the user drags a corner, and scroll positions stream on every frame.
//! This module provides the two wrappers the controllers coalesce with:
//!
//! - [`Debouncer`]: holds the latest payload of a burst and releases it once
//!   the burst has been quiet for the configured wait. The final payload is
//!   never dropped.
//! - [`Throttle`]: admits the first call immediately, then drops calls until
//!   the configured interval has elapsed. Trailing calls during the cooldown
//!   are discarded, not queued.
//!
//! Neither type owns a timer. Callers pass `now: Instant` into every
//! operation and poll the debouncer from whatever tick they already have,
//! which keeps the state machines deterministic under test.
//!
//! # Usage
//!
//! ```
//! use std::time::{Duration, Instant};
//! use everest_core::rate_limit::Debouncer;
//!
//! let mut debounce: Debouncer<f32> = Debouncer::new(Duration::from_millis(250));
//! let t0 = Instant::now();
//!
//! // A resize burst: only the last width survives.
//! debounce.trigger(1200.0, t0);
//! debounce.trigger(900.0, t0 + Duration::from_millis(10));
//! debounce.trigger(500.0, t0 + Duration::from_millis(50));
//!
//! assert_eq!(debounce.poll(t0 + Duration::from_millis(100)), None);
//! assert_eq!(debounce.poll(t0 + Duration::from_millis(300)), Some(500.0));
//! ```

use std::time::{Duration, Instant};

/// Latest-wins debouncer over an arbitrary payload.
///
/// Each [`trigger`](Self::trigger) replaces the pending payload and re-arms
/// the deadline; [`poll`](Self::poll) releases the payload once the deadline
/// has passed. At most one release happens per quiescent period.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    wait: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    payload: T,
    deadline: Instant,
}

impl<T> Debouncer<T> {
    /// Create a debouncer that waits `wait` after the last trigger.
    #[must_use]
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Record a call. Any pending payload is overwritten and the deadline
    /// restarts at `now + wait`.
    pub fn trigger(&mut self, payload: T, now: Instant) {
        self.pending = Some(Pending {
            payload,
            deadline: now + self.wait,
        });
    }

    /// Release the pending payload if its deadline has passed.
    ///
    /// Returns `None` while the burst is still hot (or nothing is pending).
    /// After a release the debouncer is empty again.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let due = matches!(&self.pending, Some(pending) if now >= pending.deadline);
        if !due {
            return None;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(wait_ms = self.wait.as_millis() as u64, "debounce release");
        self.pending.take().map(|p| p.payload)
    }

    /// Release the pending payload immediately, ignoring the deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.payload)
    }

    /// Discard the pending payload without releasing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Whether a payload is waiting for its deadline.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// The configured quiescence wait.
    #[must_use]
    pub fn wait(&self) -> Duration {
        self.wait
    }
}

/// Leading-edge throttle.
///
/// The first [`allow`](Self::allow) returns `true` immediately; later calls
/// return `true` only when `min_interval` has elapsed since the last allowed
/// call. Disallowed calls leave no trace; there is no trailing execution.
#[derive(Debug, Clone)]
pub struct Throttle {
    min_interval: Duration,
    last_allowed: Option<Instant>,
}

impl Throttle {
    /// Create a throttle with the given minimum interval between calls.
    #[must_use]
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_allowed: None,
        }
    }

    /// Whether a call at `now` is admitted. Admitted calls start a new
    /// cooldown window.
    pub fn allow(&mut self, now: Instant) -> bool {
        let admitted = match self.last_allowed {
            None => true,
            Some(last) => now.duration_since(last) >= self.min_interval,
        };
        if admitted {
            self.last_allowed = Some(now);
        }
        admitted
    }

    /// Forget the cooldown so the next call is admitted immediately.
    pub fn reset(&mut self) {
        self.last_allowed = None;
    }

    /// The configured minimum interval.
    #[must_use]
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }
}
