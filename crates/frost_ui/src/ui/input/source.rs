//! Input source interface
//!
//! The overlay never samples devices itself. The host hands it something that
//! can answer "where is the pointer" and "what did this button do this frame".

use crate::foundation::math::Vec2;

/// Mouse button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

impl MouseButton {
    pub(crate) const fn index(self) -> usize {
        match self {
            MouseButton::Left => 0,
            MouseButton::Right => 1,
            MouseButton::Middle => 2,
        }
    }
}

/// Per-frame edge state of a single button
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonEdge {
    /// Went down this frame
    pub pressed: bool,
    /// Is down (including the frame it was pressed)
    pub held: bool,
    /// Went up this frame
    pub released: bool,
}

impl ButtonEdge {
    /// True while any of the three edges is reported
    pub fn is_active(&self) -> bool {
        self.pressed || self.held || self.released
    }
}

/// Per-frame pointer and button state supplied by the host
pub trait InputSource {
    /// Pointer position in screen pixels
    fn mouse_position(&self) -> Vec2;

    /// Edge state of a mouse button for the current frame
    fn mouse_button(&self, button: MouseButton) -> ButtonEdge;

    /// Edge state of the primary (left) button
    fn primary(&self) -> ButtonEdge {
        self.mouse_button(MouseButton::Left)
    }
}
