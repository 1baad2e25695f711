//! UI Input Processing
//!
//! Turns raw up/down samples from the host's window system into the
//! pressed/held/released edges the overlay consumes.

use super::source::{ButtonEdge, InputSource, MouseButton};
use crate::foundation::math::Vec2;

/// UI input processor
///
/// Feed it window events as they arrive, hand it to
/// [`UIManager::run`](crate::ui::UIManager::run), then call [`end_frame`](Self::end_frame)
/// so the pressed/released edges only last for one frame.
#[derive(Debug, Clone)]
pub struct UIInputProcessor {
    /// Current mouse position in screen coordinates
    mouse_position: Vec2,

    /// Edge state per mouse button (left, right, middle)
    buttons: [ButtonEdge; 3],
}

impl UIInputProcessor {
    /// Create a new UI input processor
    pub fn new() -> Self {
        Self {
            mouse_position: Vec2::zeros(),
            buttons: [ButtonEdge::default(); 3],
        }
    }

    /// Update mouse position
    pub fn update_mouse_position(&mut self, x: f32, y: f32) {
        self.mouse_position = Vec2::new(x, y);
    }

    /// Update mouse button state
    ///
    /// Edges accumulate until [`end_frame`](Self::end_frame), so a press and a
    /// release inside the same frame are both reported.
    pub fn update_mouse_button(&mut self, button: MouseButton, down: bool) {
        let edge = &mut self.buttons[button.index()];
        let was_down = edge.held;
        edge.held = down;

        // Detect press/release this frame
        edge.pressed |= !was_down && down;
        edge.released |= was_down && !down;
    }

    /// Reset per-frame edges (call after the overlay has run for the frame)
    pub fn end_frame(&mut self) {
        for edge in &mut self.buttons {
            edge.pressed = false;
            edge.released = false;
        }
    }
}

impl Default for UIInputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for UIInputProcessor {
    fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    fn mouse_button(&self, button: MouseButton) -> ButtonEdge {
        self.buttons[button.index()]
    }
}
