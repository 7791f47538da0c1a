use eframe::egui;
use tracing::info;

mod controller;
mod ui;

use ui::CalculatorApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    info!("starting desktop calculator");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Calculator with History")
            .with_inner_size([400.0, 600.0])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Calculator with History",
        options,
        Box::new(|cc| Ok(Box::new(CalculatorApp::new(cc)))),
    )
}
