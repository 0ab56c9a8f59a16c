//! The drawing canvas widget.

use circlet_core::{apply, InputEvent, Point, ShapeStore};

use crate::paint::ScaledPainter;

/// Application state: the shape store plus the base canvas size used to
/// derive resize scale factors.
#[derive(Default)]
pub struct CircletApp {
    store: ShapeStore,
    base_size: Option<egui::Vec2>,
}

impl CircletApp {
    /// Scale factors relative to the first-seen canvas size. Shapes keep
    /// their logical coordinates; only painting stretches with the
    /// window.
    fn scales(&mut self, size: egui::Vec2) -> egui::Vec2 {
        let base = *self.base_size.get_or_insert(size);
        egui::vec2(size.x / base.x, size.y / base.y)
    }
}

impl eframe::App for CircletApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click());
                let canvas = response.rect;
                let scale = self.scales(canvas.size());

                if response.clicked() {
                    if let Some(pos) = response.interact_pointer_pos() {
                        // Descale the pixel position back into logical
                        // coordinates before it reaches the core.
                        let position = Point::new(
                            ((pos.x - canvas.min.x) / scale.x) as i32,
                            ((pos.y - canvas.min.y) / scale.y) as i32,
                        );
                        let toggle = ui.input(|i| i.modifiers.ctrl);
                        apply(&mut self.store, InputEvent::Click { position, toggle });
                    }
                }

                if ui.input(|i| i.key_pressed(egui::Key::Delete)) {
                    apply(&mut self.store, InputEvent::DeleteSelected);
                }

                let mut surface = ScaledPainter::new(&painter, canvas.min, scale);
                for shape in self.store.iter() {
                    shape.render(&mut surface);
                }
            });
    }
}
