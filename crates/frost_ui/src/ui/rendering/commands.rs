//! UI render commands

use crate::foundation::math::{Vec2, Vec4};

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum UIRenderCommand {
    /// Solid color rectangle
    Rect {
        /// Top-left corner
        position: Vec2,
        /// Width and height
        size: Vec2,
        /// Fill color
        color: Vec4,
    },
    /// Text run
    Text {
        /// Top-left corner
        position: Vec2,
        /// Text content
        text: String,
        /// Text color
        color: Vec4,
        /// Per-axis scale
        scale: Vec2,
    },
}
