//! The drawing-context boundary between shapes and the host.

use crate::geometry::Point;
use crate::shapes::ShapeStyle;

/// Receiver for paint requests.
///
/// The host supplies one per render pass. Shapes call back into it with
/// logical coordinates and a resolved style, leaving scaling and
/// rasterization entirely to the implementation. One method per shape
/// family; a new shape kind brings its own primitive here.
pub trait DrawContext {
    /// Draw a filled, outlined circle.
    fn circle(&mut self, center: Point, radius: i32, style: ShapeStyle);
}

/// Records draw calls in order, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingContext {
    pub circles: Vec<(Point, i32, ShapeStyle)>,
}

#[cfg(test)]
impl DrawContext for RecordingContext {
    fn circle(&mut self, center: Point, radius: i32, style: ShapeStyle) {
        self.circles.push((center, radius, style));
    }
}
