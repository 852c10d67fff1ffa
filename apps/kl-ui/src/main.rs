#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod explain_worker;
mod tooltip;
mod views;

use app::KineticsLabApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("KineticsLab"),
        ..Default::default()
    };

    eframe::run_native(
        "KineticsLab",
        options,
        Box::new(|cc| Ok(Box::new(KineticsLabApp::new(cc)))),
    )
}
