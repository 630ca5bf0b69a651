#![forbid(unsafe_code)]

//! Interaction state machines for Everest UI.
//!
//! Every widget here is headless: it owns its state, consumes typed events
//! from `everest-core`, and reports effects through a small sink trait the
//! host implements. Hosts that are missing a surface for some feature simply
//! implement that sink method as a no-op; a missing indicator row degrades
//! that feature, it never breaks the others.
//!
//! The centerpiece is [`carousel::Carousel`], the windowed-item paging
//! controller. The remaining modules cover the rest of the site behavior:
//! menu toggling, scroll-position effects, reveal-once animation
//! bookkeeping, the animated statistics counter, and contact-form
//! validation.

pub mod carousel;
pub mod counter;
pub mod form;
pub mod gesture;
pub mod item_window;
pub mod menu;
pub mod reveal;
pub mod scroll;

pub use carousel::{Breakpoints, Carousel, CarouselConfig, CarouselSurface};
pub use gesture::{SwipeConfig, SwipeDecision, SwipeTracker};
pub use item_window::ItemWindow;
