//! UI Render Backend Trait
//!
//! Defines the interface between the overlay and the host's renderer.
//! Keeps windows and widgets independent of any graphics API.

use crate::foundation::math::{Vec2, Vec4};

/// Backend-agnostic drawing interface
///
/// Called only from inside [`UIManager::run`](crate::ui::UIManager::run), in
/// painter's order: later calls draw over earlier ones. Nothing is cached
/// between frames.
pub trait UIRenderBackend {
    /// Fill an axis-aligned rectangle
    ///
    /// # Arguments
    /// * `position` - Top-left corner in screen pixels
    /// * `size` - Width and height in pixels
    /// * `color` - RGBA, components in 0..1
    fn fill_rect(&mut self, position: Vec2, size: Vec2, color: Vec4);

    /// Draw a string with its top-left corner at `position`
    fn draw_text(&mut self, position: Vec2, text: &str, color: Vec4, scale: Vec2);

    /// Measure a string at scale 1
    fn measure_text(&self, text: &str) -> Vec2;
}
