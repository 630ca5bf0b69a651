#![forbid(unsafe_code)]

//! Canonical input/event types.
//!
//! This module defines the standard event vocabulary the widget controllers
//! consume. All events derive `Clone`, `PartialEq` (and `Eq` where floats
//! permit) for use in tests and pattern matching.
//!
//! # Design Notes
//!
//! - Coordinates are device-independent pixels, `f32`, origin at the top
//!   left. Terminal hosts that adapt crossterm events get cell coordinates
//!   cast to pixels; they may scale afterwards.
//! - `Modifiers` use bitflags for easy combination.
//! - The widget controllers only need *some* causal callback mechanism:
//!   hosts subscribe to their platform's signals and forward one [`Event`]
//!   per callback.

use bitflags::bitflags;
#[cfg(not(target_arch = "wasm32"))]
use crossterm::event as cte;

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// A pointer (touch or mouse) event.
    Pointer(PointerEvent),

    /// The viewport was resized.
    Resize {
        /// New viewport width in device-independent pixels.
        width: f32,
        /// New viewport height in device-independent pixels.
        height: f32,
    },

    /// The document scrolled.
    Scroll {
        /// Vertical scroll offset from the top of the document, in pixels.
        y: f32,
    },
}

impl Event {
    /// Convert a crossterm event into an everest [`Event`].
    ///
    /// Returns `None` for events with no everest counterpart (focus, paste,
    /// key release, scroll-wheel ticks, unmapped keys). Mouse coordinates
    /// arrive in terminal cells and are carried over as pixels unscaled.
    #[must_use]
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_crossterm(event: cte::Event) -> Option<Self> {
        match event {
            cte::Event::Key(key) => {
                if key.kind == cte::KeyEventKind::Release {
                    return None;
                }
                let code = map_crossterm_key(key.code)?;
                Some(Self::Key(
                    KeyEvent::new(code).with_modifiers(map_crossterm_modifiers(key.modifiers)),
                ))
            }
            cte::Event::Mouse(mouse) => {
                let phase = match mouse.kind {
                    cte::MouseEventKind::Down(_) => PointerPhase::Down,
                    cte::MouseEventKind::Drag(_) | cte::MouseEventKind::Moved => PointerPhase::Move,
                    cte::MouseEventKind::Up(_) => PointerPhase::Up,
                    _ => return None,
                };
                Some(Self::Pointer(PointerEvent::new(
                    phase,
                    f32::from(mouse.column),
                    f32::from(mouse.row),
                )))
            }
            cte::Event::Resize(width, height) => Some(Self::Resize {
                width: f32::from(width),
                height: f32::from(height),
            }),
            _ => None,
        }
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),

    /// Enter/Return key.
    Enter,

    /// Escape key.
    Escape,

    /// Backspace key.
    Backspace,

    /// Tab key.
    Tab,

    /// Left arrow key.
    Left,

    /// Right arrow key.
    Right,

    /// Up arrow key.
    Up,

    /// Down arrow key.
    Down,

    /// Home key.
    Home,

    /// End key.
    End,
}

bitflags! {
    /// Modifier keys that can be held during a key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE  = 0b0000;
        /// Shift key.
        const SHIFT = 0b0001;
        /// Alt/Option key.
        const ALT   = 0b0010;
        /// Control key.
        const CTRL  = 0b0100;
    }
}

impl Default for Modifiers {
    fn default() -> Self {
        Self::NONE
    }
}

/// A pointer event (touch or mouse).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Which part of the down/move/up triad this is.
    pub phase: PointerPhase,

    /// X coordinate in device-independent pixels.
    pub x: f32,

    /// Y coordinate in device-independent pixels.
    pub y: f32,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self { phase, x, y }
    }
}

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Contact started (touch-start / button down).
    Down,

    /// Contact moved while held.
    Move,

    /// Contact ended (touch-end / button up).
    Up,
}

#[cfg(not(target_arch = "wasm32"))]
fn map_crossterm_key(code: cte::KeyCode) -> Option<KeyCode> {
    match code {
        cte::KeyCode::Char(c) => Some(KeyCode::Char(c)),
        cte::KeyCode::Enter => Some(KeyCode::Enter),
        cte::KeyCode::Esc => Some(KeyCode::Escape),
        cte::KeyCode::Backspace => Some(KeyCode::Backspace),
        cte::KeyCode::Tab => Some(KeyCode::Tab),
        cte::KeyCode::Left => Some(KeyCode::Left),
        cte::KeyCode::Right => Some(KeyCode::Right),
        cte::KeyCode::Up => Some(KeyCode::Up),
        cte::KeyCode::Down => Some(KeyCode::Down),
        cte::KeyCode::Home => Some(KeyCode::Home),
        cte::KeyCode::End => Some(KeyCode::End),
        _ => None,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn map_crossterm_modifiers(modifiers: cte::KeyModifiers) -> Modifiers {
    let mut out = Modifiers::NONE;
    if modifiers.contains(cte::KeyModifiers::SHIFT) {
        out |= Modifiers::SHIFT;
    }
    if modifiers.contains(cte::KeyModifiers::ALT) {
        out |= Modifiers::ALT;
    }
    if modifiers.contains(cte::KeyModifiers::CONTROL) {
        out |= Modifiers::CTRL;
    }
    out
}
