//! Input abstraction layer.
//!
//! Normalizes raw host events (DOM `MouseEvent.button` codes, wheel deltas,
//! `KeyboardEvent.key` strings) into a unified `InputEvent` enum.

/// Which pointer button a press/release refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left mouse button, touch contact, pen tip.
    Primary,
    /// Wheel button. Starts a pan.
    Middle,
    Secondary,
    Other(i32),
}

impl PointerButton {
    /// Map a DOM `MouseEvent.button` code.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => Self::Primary,
            1 => Self::Middle,
            2 => Self::Secondary,
            other => Self::Other(other),
        }
    }
}

/// A normalized input event, in screen pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown {
        x: i32,
        y: i32,
        button: PointerButton,
    },

    PointerMove { x: i32, y: i32 },

    PointerUp {
        x: i32,
        y: i32,
        button: PointerButton,
    },

    /// Scroll wheel / trackpad. Negative `delta_y` scrolls up (zoom in).
    Wheel { x: i32, y: i32, delta_y: f32 },

    /// Key press, as the `KeyboardEvent.key` value (e.g. `"g"`, `"ArrowLeft"`).
    Key { key: String },
}

impl InputEvent {
    pub fn from_pointer_down(x: i32, y: i32, button: i32) -> Self {
        Self::PointerDown {
            x,
            y,
            button: PointerButton::from_code(button),
        }
    }

    pub fn from_pointer_move(x: i32, y: i32) -> Self {
        Self::PointerMove { x, y }
    }

    pub fn from_pointer_up(x: i32, y: i32, button: i32) -> Self {
        Self::PointerUp {
            x,
            y,
            button: PointerButton::from_code(button),
        }
    }
}
