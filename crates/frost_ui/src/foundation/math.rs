//! Math utilities and types
//!
//! Screen-space vectors, colors and rectangle tests used by windows and widgets.
//! All coordinates are host pixels with the origin at the top-left.

use serde::{Deserialize, Serialize};

pub use nalgebra::{Vector2, Vector4};

/// 2D vector type (positions and sizes in pixels)
pub type Vec2 = Vector2<f32>;

/// 4D vector type (RGBA colors, components in 0..1)
pub type Vec4 = Vector4<f32>;

/// Build a color from 8-bit channels
pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Vec4 {
    Vec4::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        f32::from(a) / 255.0,
    )
}

/// Axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub position: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// X coordinate one past the right edge
    pub fn right(&self) -> f32 {
        self.position.x + self.size.x
    }

    /// Y coordinate one past the bottom edge
    pub fn bottom(&self) -> f32 {
        self.position.y + self.size.y
    }

    /// Check if a point lies inside the rectangle
    ///
    /// The interval is half-open on both axes, so two rectangles that only
    /// share an edge never both contain the same point.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.position.x
            && point.x < self.right()
            && point.y >= self.position.y
            && point.y < self.bottom()
    }

    /// Check if two rectangles share any interior area
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() > other.position.x
            && self.position.x < other.right()
            && self.bottom() > other.position.y
            && self.position.y < other.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_contains_is_half_open() {
        let rect = Rect::new(Vec2::new(10.0, 10.0), Vec2::new(100.0, 50.0));

        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(rect.contains(Vec2::new(109.9, 59.9)));
        assert!(!rect.contains(Vec2::new(110.0, 30.0)));
        assert!(!rect.contains(Vec2::new(30.0, 60.0)));
        assert!(!rect.contains(Vec2::new(9.0, 30.0)));
    }

    #[test]
    fn test_overlap_requires_shared_area() {
        let a = Rect::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 100.0));
        let touching = Rect::new(Vec2::new(100.0, 0.0), Vec2::new(100.0, 100.0));
        let crossing = Rect::new(Vec2::new(50.0, 50.0), Vec2::new(100.0, 100.0));
        let inside = Rect::new(Vec2::new(10.0, 10.0), Vec2::new(5.0, 5.0));

        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&crossing));
        assert!(crossing.overlaps(&a));
        assert!(a.overlaps(&inside));
    }

    #[test]
    fn test_rgba8() {
        let color = rgba8(255, 0, 51, 255);
        assert_relative_eq!(color.x, 1.0);
        assert_relative_eq!(color.y, 0.0);
        assert_relative_eq!(color.z, 0.2);
        assert_relative_eq!(color.w, 1.0);
    }
}
