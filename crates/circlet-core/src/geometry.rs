//! Integer geometry for the logical coordinate space.

use serde::{Deserialize, Serialize};

/// A point in logical coordinates.
///
/// Logical space is integer by construction: the host descales pixel
/// positions before they cross into the core, so no fractional
/// coordinates exist on this side of the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    ///
    /// Computed in `i64`, exact over the whole `i32` coordinate range.
    pub fn dist_sq(self, other: Point) -> i64 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        dx * dx + dy * dy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dist_sq() {
        let origin = Point::ZERO;
        assert_eq!(origin.dist_sq(Point::new(3, 4)), 25);
        assert_eq!(origin.dist_sq(origin), 0);
    }

    #[test]
    fn test_dist_sq_extreme_coordinates() {
        let a = Point::new(i32::MIN, i32::MIN);
        let b = Point::new(i32::MAX, i32::MAX);
        assert!(a.dist_sq(b) > 0);
    }
}
