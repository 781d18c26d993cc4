//! BMI Calculator GUI
//!
//! Desktop application that computes Body Mass Index from user-entered
//! weight and height and shows the classification on an analog dial.

mod app;
mod dial_widget;
mod state;

use app::BmiApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 680.0])
            .with_min_inner_size([360.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "BMI Calculator",
        options,
        Box::new(|cc| Ok(Box::new(BmiApp::new(cc)))),
    )
}
