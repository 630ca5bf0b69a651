#![forbid(unsafe_code)]

//! Everest UI public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for hosts. It
//! re-exports the common types from the member crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! A host wires the widgets up in three moves: translate platform input
//! into [`Event`] values, hand them to the controllers, and implement the
//! sink traits ([`CarouselSurface`], [`MenuSurface`], [`ScrollSurface`])
//! that make state visible.

// --- Core re-exports -------------------------------------------------------

pub use everest_core::event::{
    Event, KeyCode, KeyEvent, Modifiers, PointerEvent, PointerPhase,
};
pub use everest_core::geometry::Point;
pub use everest_core::rate_limit::{Debouncer, Throttle};

// --- Widget re-exports -----------------------------------------------------

pub use everest_widgets::carousel::{Breakpoints, Carousel, CarouselConfig, CarouselSurface};
pub use everest_widgets::counter::{CountUp, format_stat};
pub use everest_widgets::form::{ContactForm, Field, ValidationError};
pub use everest_widgets::gesture::{SwipeConfig, SwipeDecision, SwipeTracker};
pub use everest_widgets::item_window::ItemWindow;
pub use everest_widgets::menu::{MenuSurface, NavMenu};
pub use everest_widgets::reveal::{ElementRect, RevealSet};
pub use everest_widgets::scroll::{ScrollEffects, ScrollSurface, ScrollThresholds};

// --- Intent re-exports -----------------------------------------------------

#[cfg(feature = "intent")]
pub use everest_intent::{Intent, IntentMatcher, Reply, Rule, TaxBreakdown, TaxRates};

/// Commonly used imports for host applications.
pub mod prelude {
    pub use crate::{
        Breakpoints, Carousel, CarouselConfig, CarouselSurface, Event, ItemWindow, KeyCode,
        KeyEvent, MenuSurface, NavMenu, PointerEvent, PointerPhase, ScrollEffects, ScrollSurface,
        SwipeDecision,
    };

    #[cfg(feature = "intent")]
    pub use crate::{Intent, IntentMatcher, Reply};
}
