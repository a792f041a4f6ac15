//! Pixel coordinates.

use std::fmt;

/// A pixel position. Signed so overlays may extend past the frame edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Center of a `width` x `height` frame.
    pub fn center_of(width: u32, height: u32) -> Self {
        Self::new((width / 2) as i32, (height / 2) as i32)
    }

    /// Euclidean distance.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        dx.hypot(dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
