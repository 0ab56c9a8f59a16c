//! Native entry point for the Circlet window.

mod app;
mod paint;

use app::CircletApp;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting Circlet");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Circlet")
            .with_inner_size([960.0, 600.0])
            .with_min_inner_size([500.0, 350.0]),
        ..Default::default()
    };
    eframe::run_native(
        "circlet",
        options,
        Box::new(|_cc| Ok(Box::new(CircletApp::default()))),
    )
}
