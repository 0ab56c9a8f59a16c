//! Circle shape.

use super::{Shape, ShapeStyle, ShapeTrait};
use crate::geometry::Point;
use crate::render::DrawContext;
use serde::{Deserialize, Serialize};

/// A filled, outlined circle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circle {
    /// Center in logical coordinates.
    pub center: Point,
    radius: i32,
    selected: bool,
}

impl Circle {
    /// Radius given to circles created by a click on empty space.
    pub const DEFAULT_RADIUS: i32 = 30;

    /// Create an unselected circle with the default radius.
    pub fn new(center: Point) -> Self {
        Self::with_radius(center, Self::DEFAULT_RADIUS)
    }

    /// Create an unselected circle with an explicit radius.
    ///
    /// # Panics
    ///
    /// Panics if `radius` is not positive.
    pub fn with_radius(center: Point, radius: i32) -> Self {
        assert!(radius > 0, "circle radius must be positive, got {radius}");
        Self {
            center,
            radius,
            selected: false,
        }
    }

    /// Radius in logical units. Always positive.
    pub fn radius(&self) -> i32 {
        self.radius
    }
}

impl ShapeTrait for Circle {
    fn render(&self, ctx: &mut dyn DrawContext) {
        ctx.circle(
            self.center,
            self.radius,
            ShapeStyle::for_selection(self.selected),
        );
    }

    fn contains(&self, point: Point) -> bool {
        // Squared distance avoids the square root and stays exact for
        // integer coordinates. The boundary counts as inside.
        let r = i64::from(self.radius);
        self.center.dist_sq(point) <= r * r
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}
