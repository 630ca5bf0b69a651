#![forbid(unsafe_code)]

//! Carousel navigation controller.
//!
//! [`Carousel`] orchestrates one [`ItemWindow`], one [`SwipeTracker`], and a
//! debounced resize channel, and reports every state change to a
//! host-supplied [`CarouselSurface`]. The controller never touches a
//! document tree: the surface repositions the visible item track and keeps
//! the indicator row in sync.
//!
//! # Event wiring
//!
//! | Signal | Effect |
//! |--------|--------|
//! | "previous" control | step back one item, then render |
//! | "next" control | step forward one item, then render |
//! | indicator *i* | jump to offset *i* (clamped), then render |
//! | ArrowLeft / ArrowRight | same as previous / next |
//! | pointer down/move/up | swipe resolution, then same as the controls |
//! | viewport resize | debounced layout recompute on [`poll`](Carousel::poll) |
//!
//! # Invariants
//!
//! 1. Every mutation leaves the window offset clamped into its valid range;
//!    out-of-range requests are silently clamped, never an error.
//! 2. The indicator set is rebuilt (discard + rebuild, no diffing) exactly
//!    when the page count changes; otherwise only the active marker moves.
//! 3. Whenever indicators exist, exactly one is active.
//! 4. A carousel over zero items is inert: navigation is a silent no-op and
//!    the surface is never asked to move the track.
//!
//! Resize recomputation clamps the offset and nothing more; it does not
//! re-align to a page boundary.

use std::time::{Duration, Instant};

use everest_core::event::{Event, KeyCode, KeyEvent, PointerPhase};
use everest_core::rate_limit::Debouncer;

use crate::gesture::{SwipeConfig, SwipeDecision, SwipeTracker};
use crate::item_window::ItemWindow;

/// Viewport-width breakpoints for the responsive layout.
///
/// Widths below `narrow_max` show one item, widths below `medium_max` show
/// two, anything wider shows three.
#[derive(Debug, Clone)]
pub struct Breakpoints {
    /// Upper bound (exclusive) of the single-item layout, in pixels.
    pub narrow_max: f32,
    /// Upper bound (exclusive) of the two-item layout, in pixels.
    pub medium_max: f32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            narrow_max: 768.0,
            medium_max: 1024.0,
        }
    }
}

impl Breakpoints {
    /// Items visible at once for the given viewport width.
    #[must_use]
    pub fn items_per_view(&self, width: f32) -> usize {
        if width < self.narrow_max {
            1
        } else if width < self.medium_max {
            2
        } else {
            3
        }
    }
}

/// Configuration for a [`Carousel`].
#[derive(Debug, Clone)]
pub struct CarouselConfig {
    /// Responsive breakpoints.
    pub breakpoints: Breakpoints,
    /// Width of one item in pixels (default: 350).
    pub item_width: f32,
    /// Gap between items in pixels (default: 24).
    pub gap: f32,
    /// Swipe detection settings.
    pub swipe: SwipeConfig,
    /// Quiescence wait before a resize burst is applied (default: 250 ms).
    pub resize_wait: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            item_width: 350.0,
            gap: 24.0,
            swipe: SwipeConfig::default(),
            resize_wait: Duration::from_millis(250),
        }
    }
}

impl CarouselConfig {
    /// Set the item width and gap used for track offsets.
    #[must_use]
    pub fn with_item_metrics(mut self, item_width: f32, gap: f32) -> Self {
        self.item_width = item_width;
        self.gap = gap;
        self
    }

    /// Set the resize debounce wait.
    #[must_use]
    pub fn with_resize_wait(mut self, wait: Duration) -> Self {
        self.resize_wait = wait;
        self
    }

    /// Set the swipe configuration.
    #[must_use]
    pub fn with_swipe(mut self, swipe: SwipeConfig) -> Self {
        self.swipe = swipe;
        self
    }

    /// Set the responsive breakpoints.
    #[must_use]
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }
}

/// Render sink a host implements to make carousel state visible.
///
/// A host missing a surface for some feature implements that method as a
/// no-op; the remaining behavior is unaffected.
pub trait CarouselSurface {
    /// Reposition the item track. `offset_px` is the signed translation of
    /// the track, `−(current_index × (item_width + gap))`. `animate` is
    /// false exactly once, for the initial mount pass.
    fn set_track_offset(&mut self, offset_px: f32, animate: bool);

    /// Discard the indicator row and rebuild it with `count` indicators,
    /// marking `active` (when present) as the active one.
    fn rebuild_indicators(&mut self, count: usize, active: Option<usize>);

    /// Move the active marker without rebuilding the row.
    fn set_active_indicator(&mut self, active: Option<usize>);
}

/// Windowed multi-item carousel with touch and keyboard navigation.
#[derive(Debug, Clone)]
pub struct Carousel {
    window: ItemWindow,
    swipe: SwipeTracker,
    resize: Debouncer<f32>,
    indicator_count: usize,
    config: CarouselConfig,
}

impl Carousel {
    /// Create a carousel over a fixed collection of `total_items` items at
    /// the given viewport width.
    ///
    /// Call [`mount`](Self::mount) afterwards to build the initial
    /// indicator set and perform the first render pass.
    #[must_use]
    pub fn new(total_items: usize, viewport_width: f32, config: CarouselConfig) -> Self {
        let items_per_view = config.breakpoints.items_per_view(viewport_width);
        let window = ItemWindow::new(total_items, items_per_view);
        let indicator_count = window.page_count();
        Self {
            window,
            swipe: SwipeTracker::with_config(config.swipe.clone()),
            resize: Debouncer::new(config.resize_wait),
            indicator_count,
            config,
        }
    }

    /// Build the initial indicator set and render once, without animation.
    pub fn mount<S: CarouselSurface>(&mut self, surface: &mut S) {
        surface.rebuild_indicators(self.indicator_count, self.active_indicator());
        if !self.window.is_empty() {
            surface.set_track_offset(self.track_offset(), false);
        }
    }

    /// Step forward one item ("next" control, ArrowRight, left swipe).
    pub fn next<S: CarouselSurface>(&mut self, surface: &mut S) {
        if self.window.advance() {
            #[cfg(feature = "tracing")]
            tracing::debug!(index = self.window.current_index(), "carousel advance");
            self.render(surface);
        }
    }

    /// Step back one item ("previous" control, ArrowLeft, right swipe).
    pub fn previous<S: CarouselSurface>(&mut self, surface: &mut S) {
        if self.window.retreat() {
            #[cfg(feature = "tracing")]
            tracing::debug!(index = self.window.current_index(), "carousel retreat");
            self.render(surface);
        }
    }

    /// Jump to the offset behind indicator `index`. Out-of-range indices
    /// clamp silently.
    pub fn select_indicator<S: CarouselSurface>(&mut self, index: usize, surface: &mut S) {
        if self.window.is_empty() {
            return;
        }
        self.window.jump_to(index);
        self.render(surface);
    }

    /// Keyboard binding: ArrowLeft is previous, ArrowRight is next.
    pub fn handle_key<S: CarouselSurface>(&mut self, key: KeyEvent, surface: &mut S) {
        match key.code {
            KeyCode::Left => self.previous(surface),
            KeyCode::Right => self.next(surface),
            _ => {}
        }
    }

    /// Pointer contact started over the track.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if !self.window.is_empty() {
            self.swipe.on_start(x, y);
        }
    }

    /// Pointer moved while held. Returns whether the host should suppress
    /// the surface's default handling (scrolling, selection).
    #[must_use]
    pub fn pointer_move(&self) -> bool {
        self.swipe.on_move()
    }

    /// Pointer released: resolve the gesture into navigation.
    pub fn pointer_up<S: CarouselSurface>(&mut self, x: f32, y: f32, surface: &mut S) {
        match self.swipe.on_end(x, y) {
            SwipeDecision::Advance => self.next(surface),
            SwipeDecision::Retreat => self.previous(surface),
            SwipeDecision::None => {}
        }
    }

    /// Record a viewport resize. The layout is not recomputed until the
    /// burst has been quiet for the configured wait and
    /// [`poll`](Self::poll) runs; only the last observed width is applied.
    pub fn resize(&mut self, width: f32, now: Instant) {
        self.resize.trigger(width, now);
    }

    /// Apply a pending resize whose quiescence deadline has passed.
    ///
    /// Hosts call this from whatever tick they already have.
    pub fn poll<S: CarouselSurface>(&mut self, now: Instant, surface: &mut S) {
        if let Some(width) = self.resize.poll(now) {
            self.apply_layout(width, surface);
        }
    }

    /// Dispatch one canonical event.
    ///
    /// Returns whether the host should suppress its default handling for
    /// the event (true only for pointer moves during a gesture).
    pub fn handle_event<S: CarouselSurface>(
        &mut self,
        event: &Event,
        now: Instant,
        surface: &mut S,
    ) -> bool {
        match event {
            Event::Key(key) => {
                self.handle_key(*key, surface);
                false
            }
            Event::Pointer(pointer) => match pointer.phase {
                PointerPhase::Down => {
                    self.pointer_down(pointer.x, pointer.y);
                    false
                }
                PointerPhase::Move => self.pointer_move(),
                PointerPhase::Up => {
                    self.pointer_up(pointer.x, pointer.y, surface);
                    false
                }
            },
            Event::Resize { width, .. } => {
                self.resize(*width, now);
                false
            }
            Event::Scroll { .. } => false,
        }
    }

    /// Current offset index.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.window.current_index()
    }

    /// Items visible at once under the current layout.
    #[must_use]
    pub fn items_per_view(&self) -> usize {
        self.window.items_per_view()
    }

    /// Largest valid offset index.
    #[must_use]
    pub fn max_index(&self) -> usize {
        self.window.max_index()
    }

    /// Pages under the current layout (one indicator per page).
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.window.page_count()
    }

    /// Whether the carousel holds no items and ignores navigation.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.window.is_empty()
    }

    /// Whether a resize is waiting for its quiescence deadline.
    #[must_use]
    pub fn has_pending_resize(&self) -> bool {
        self.resize.has_pending()
    }

    fn apply_layout<S: CarouselSurface>(&mut self, width: f32, surface: &mut S) {
        let items_per_view = self.config.breakpoints.items_per_view(width);
        self.window.recompute_layout(items_per_view);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            width,
            items_per_view,
            index = self.window.current_index(),
            "carousel layout recomputed"
        );
        if self.window.is_empty() {
            return;
        }

        surface.set_track_offset(self.track_offset(), true);
        let pages = self.window.page_count();
        if pages != self.indicator_count {
            self.indicator_count = pages;
            surface.rebuild_indicators(pages, self.active_indicator());
        } else {
            surface.set_active_indicator(self.active_indicator());
        }
    }

    fn render<S: CarouselSurface>(&self, surface: &mut S) {
        surface.set_track_offset(self.track_offset(), true);
        surface.set_active_indicator(self.active_indicator());
    }

    fn track_offset(&self) -> f32 {
        -(self.window.current_index() as f32 * (self.config.item_width + self.config.gap))
    }

    fn active_indicator(&self) -> Option<usize> {
        if self.indicator_count == 0 {
            None
        } else {
            Some(self.window.current_index().min(self.indicator_count - 1))
        }
    }
}
