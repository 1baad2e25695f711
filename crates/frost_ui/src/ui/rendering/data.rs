//! Backend-agnostic UI rendering data structures

use super::commands::UIRenderCommand;
use crate::foundation::math::{Vec2, Vec4};
use crate::ui::backend::UIRenderBackend;

/// Recorded draw calls for one or more frames
///
/// Implements [`UIRenderBackend`] by storing every call in order. Hosts that
/// batch their own geometry can run the overlay into this and translate the
/// commands afterwards; tests use it to inspect what was drawn.
///
/// Text is measured with a fixed glyph cell, which matches bitmap fonts and
/// keeps layout deterministic.
#[derive(Debug, Clone)]
pub struct UIRenderData {
    /// Draw calls in submission order
    pub commands: Vec<UIRenderCommand>,

    /// Size of one glyph at scale 1
    pub glyph_size: Vec2,
}

impl UIRenderData {
    /// Create empty render data with 8x8 glyphs
    pub fn new() -> Self {
        Self::with_glyph_size(Vec2::new(8.0, 8.0))
    }

    /// Create empty render data with a custom glyph cell
    pub fn with_glyph_size(glyph_size: Vec2) -> Self {
        Self {
            commands: Vec::new(),
            glyph_size,
        }
    }

    /// Drop all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Recorded rectangles as (position, size, color)
    pub fn rects(&self) -> impl Iterator<Item = (Vec2, Vec2, Vec4)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            UIRenderCommand::Rect { position, size, color } => Some((*position, *size, *color)),
            UIRenderCommand::Text { .. } => None,
        })
    }

    /// Recorded text runs as (position, text)
    pub fn texts(&self) -> impl Iterator<Item = (Vec2, &str)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            UIRenderCommand::Text { position, text, .. } => Some((*position, text.as_str())),
            UIRenderCommand::Rect { .. } => None,
        })
    }

    /// Index of the first text command with this content
    pub fn text_index(&self, needle: &str) -> Option<usize> {
        self.commands.iter().position(|command| {
            matches!(command, UIRenderCommand::Text { text, .. } if text == needle)
        })
    }
}

impl Default for UIRenderData {
    fn default() -> Self {
        Self::new()
    }
}

impl UIRenderBackend for UIRenderData {
    fn fill_rect(&mut self, position: Vec2, size: Vec2, color: Vec4) {
        self.commands.push(UIRenderCommand::Rect { position, size, color });
    }

    fn draw_text(&mut self, position: Vec2, text: &str, color: Vec4, scale: Vec2) {
        self.commands.push(UIRenderCommand::Text {
            position,
            text: text.to_string(),
            color,
            scale,
        });
    }

    fn measure_text(&self, text: &str) -> Vec2 {
        let longest = text.lines().map(|line| line.chars().count()).max().unwrap_or(0);
        let lines = text.lines().count().max(1);
        #[allow(clippy::cast_precision_loss)]
        let (columns, rows) = (longest as f32, lines as f32);
        Vec2::new(columns * self.glyph_size.x, rows * self.glyph_size.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_text() {
        let data = UIRenderData::new();
        assert_eq!(data.measure_text("Hello"), Vec2::new(40.0, 8.0));
        assert_eq!(data.measure_text("ab\nabcd"), Vec2::new(32.0, 16.0));
        assert_eq!(data.measure_text(""), Vec2::new(0.0, 8.0));
    }

    #[test]
    fn test_records_in_order() {
        let mut data = UIRenderData::new();
        data.fill_rect(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), Vec4::new(1.0, 0.0, 0.0, 1.0));
        data.draw_text(
            Vec2::new(5.0, 6.0),
            "hi",
            Vec4::new(1.0, 1.0, 1.0, 1.0),
            Vec2::new(1.0, 1.0),
        );

        assert_eq!(data.commands.len(), 2);
        assert_eq!(data.rects().count(), 1);
        assert_eq!(data.text_index("hi"), Some(1));
        assert_eq!(data.texts().next(), Some((Vec2::new(5.0, 6.0), "hi")));

        data.clear();
        assert!(data.commands.is_empty());
    }
}
