//! `DrawContext` implementation over an egui painter.

use circlet_core::{DrawContext, Point, Rgba8, ShapeStyle};

/// Paints core shapes into an egui canvas, applying the window resize
/// scale factors on the way out of logical space.
pub struct ScaledPainter<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    scale: egui::Vec2,
}

impl<'a> ScaledPainter<'a> {
    pub fn new(painter: &'a egui::Painter, origin: egui::Pos2, scale: egui::Vec2) -> Self {
        Self {
            painter,
            origin,
            scale,
        }
    }

    fn to_screen(&self, point: Point) -> egui::Pos2 {
        egui::pos2(
            self.origin.x + point.x as f32 * self.scale.x,
            self.origin.y + point.y as f32 * self.scale.y,
        )
    }
}

fn color(c: Rgba8) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

impl DrawContext for ScaledPainter<'_> {
    fn circle(&mut self, center: Point, radius: i32, style: ShapeStyle) {
        // egui has no ellipse primitive; keep the circle round under
        // non-uniform resize by following the smaller axis scale.
        let r = radius as f32 * self.scale.x.min(self.scale.y);
        self.painter.circle(
            self.to_screen(center),
            r,
            color(style.fill),
            egui::Stroke::new(style.stroke_width as f32, color(style.stroke)),
        );
    }
}
