//! Shape definitions for the drawing surface.

mod circle;

pub use circle::Circle;

use crate::geometry::Point;
use crate::render::DrawContext;
use serde::{Deserialize, Serialize};

/// Plain RGBA8 color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const DARK_BLUE: Self = Self::new(0, 0, 128, 255);
}

/// Visual style for painting a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Interior fill color.
    pub fill: Rgba8,
    /// Outline color.
    pub stroke: Rgba8,
    /// Outline width in logical units.
    pub stroke_width: u32,
}

impl ShapeStyle {
    /// Style of a selected shape.
    pub const SELECTED: Self = Self {
        fill: Rgba8::DARK_BLUE,
        stroke: Rgba8::DARK_BLUE,
        stroke_width: 2,
    };

    /// Style of an unselected shape.
    pub const UNSELECTED: Self = Self {
        fill: Rgba8::WHITE,
        stroke: Rgba8::BLACK,
        stroke_width: 2,
    };

    /// Pick the style matching a selection flag. Visual state is purely a
    /// function of that flag.
    pub fn for_selection(selected: bool) -> Self {
        if selected {
            Self::SELECTED
        } else {
            Self::UNSELECTED
        }
    }
}

/// Common trait for all shapes.
///
/// A shape can paint itself, answer point containment and carry a
/// selection flag. Nothing else: position in the stack is the store's
/// business, not the shape's.
pub trait ShapeTrait {
    /// Paint the shape into a host-supplied drawing context.
    fn render(&self, ctx: &mut dyn DrawContext);

    /// Whether a logical point lies within or on the shape boundary.
    fn contains(&self, point: Point) -> bool;

    /// Get the selection flag.
    fn is_selected(&self) -> bool;

    /// Set the selection flag.
    fn set_selected(&mut self, selected: bool);
}

/// Closed union of all shape kinds.
///
/// New kinds (a rectangle, say) are added as variants here and delegated
/// below; [`crate::store::ShapeStore`] only ever sees this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shape {
    Circle(Circle),
}

impl Shape {
    pub fn render(&self, ctx: &mut dyn DrawContext) {
        match self {
            Shape::Circle(s) => s.render(ctx),
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        match self {
            Shape::Circle(s) => s.contains(point),
        }
    }

    pub fn is_selected(&self) -> bool {
        match self {
            Shape::Circle(s) => s.is_selected(),
        }
    }

    pub fn set_selected(&mut self, selected: bool) {
        match self {
            Shape::Circle(s) => s.set_selected(selected),
        }
    }
}
