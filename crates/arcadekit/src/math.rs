//! Math types and glam re-exports.
//!
//! We re-export [glam](https://docs.rs/glam) types so users don't need to
//! depend on it directly. The [`Rect`] type describes a world-space rectangle
//! such as the scene's frame.

pub use glam::Vec2;

/// A world-space rectangle described by its origin (min corner) and size.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    /// A zero-sized rectangle at the origin.
    pub const ZERO: Self = Self {
        origin: Vec2::ZERO,
        size: Vec2::ZERO,
    };

    /// Build a rectangle from origin and size components.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// The max corner (origin + size).
    pub fn max(&self) -> Vec2 {
        self.origin + self.size
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Returns `true` if the point lies inside the rectangle (min-inclusive).
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.origin.x && point.y >= self.origin.y && point.x < max.x && point.y < max.y
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_edges() {
        let r = Rect::new(-5.0, -5.0, 10.0, 10.0);
        assert!(r.contains(Vec2::ZERO));
        assert!(r.contains(Vec2::new(-5.0, -5.0)));
        assert!(!r.contains(Vec2::new(5.0, 5.0)));
        assert_eq!(r.max(), Vec2::new(5.0, 5.0));
    }
}
