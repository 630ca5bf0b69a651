#![forbid(unsafe_code)]

//! Mobile navigation menu state.
//!
//! [`NavMenu`] is the open/close machine behind the hamburger control. The
//! host owns the actual panel; it receives `set_open` exactly when the state
//! changes, so closing an already-closed menu is silent.
//!
//! Close paths besides the toggle control: Escape while open, a press
//! outside the header while open, and activating any navigation link.

use everest_core::event::{KeyCode, KeyEvent};

/// Render sink for menu state.
pub trait MenuSurface {
    /// The menu opened or closed.
    fn set_open(&mut self, open: bool);
}

/// Open/close state machine for the mobile navigation menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// Create a closed menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The toggle control was activated.
    pub fn toggle<S: MenuSurface>(&mut self, surface: &mut S) {
        if self.open {
            self.close(surface);
        } else {
            self.open(surface);
        }
    }

    /// Open the menu. Silent if already open.
    pub fn open<S: MenuSurface>(&mut self, surface: &mut S) {
        if !self.open {
            self.open = true;
            #[cfg(feature = "tracing")]
            tracing::debug!("menu open");
            surface.set_open(true);
        }
    }

    /// Close the menu. Silent if already closed.
    pub fn close<S: MenuSurface>(&mut self, surface: &mut S) {
        if self.open {
            self.open = false;
            #[cfg(feature = "tracing")]
            tracing::debug!("menu close");
            surface.set_open(false);
        }
    }

    /// Keyboard binding: Escape closes an open menu.
    pub fn handle_key<S: MenuSurface>(&mut self, key: KeyEvent, surface: &mut S) {
        if key.code == KeyCode::Escape {
            self.close(surface);
        }
    }

    /// A press landed outside the header area.
    pub fn outside_press<S: MenuSurface>(&mut self, surface: &mut S) {
        self.close(surface);
    }

    /// A navigation link was activated.
    pub fn link_activated<S: MenuSurface>(&mut self, surface: &mut S) {
        self.close(surface);
    }
}
