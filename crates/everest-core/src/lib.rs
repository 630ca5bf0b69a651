#![forbid(unsafe_code)]

//! Core: canonical input events, pixel geometry, and rate limiting.
//!
//! Everything in this crate is host-agnostic. A host (web shell, terminal
//! demo, test harness) translates its native input into [`event::Event`]
//! values and feeds them to the widget controllers in `everest-widgets`;
//! nothing here performs I/O or owns a timer. Time-dependent state machines
//! take `now: std::time::Instant` as an explicit parameter so callers stay
//! in control of the clock.

pub mod event;
pub mod geometry;
pub mod rate_limit;
