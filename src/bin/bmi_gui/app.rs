//! Main GUI application

use crate::dial_widget;
use crate::state::AppState;
use bmi_dial::compute;
use eframe::egui;

/// Main application struct
pub struct BmiApp {
    state: AppState,
}

impl BmiApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            state: AppState::default(),
        }
    }

    /// Validate the inputs and compute a new result
    ///
    /// On invalid input the previous result and dial are left unchanged and
    /// a modal error dialog is raised instead.
    fn calculate(&mut self) {
        match compute(&self.state.inputs.weight, &self.state.inputs.height) {
            Ok(result) => {
                self.state.result = Some(result);
                self.state.ui.show_advisory = result.category.needs_advisory();
            }
            Err(e) => {
                self.state.ui.error = Some(format!("Please enter valid numbers.\n\n{}", e));
            }
        }
    }

    /// Render the input form and Calculate button
    fn render_input_form(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("inputs")
            .num_columns(2)
            .spacing([10.0, 8.0])
            .show(ui, |ui| {
                ui.label("Weight (kg):");
                ui.add(
                    egui::TextEdit::singleline(&mut self.state.inputs.weight)
                        .hint_text("e.g. 70")
                        .desired_width(120.0),
                );
                ui.end_row();

                ui.label("Height (cm):");
                ui.add(
                    egui::TextEdit::singleline(&mut self.state.inputs.height)
                        .hint_text("e.g. 175")
                        .desired_width(120.0),
                );
                ui.end_row();
            });

        ui.add_space(8.0);

        if ui.button("Calculate BMI").clicked() {
            self.calculate();
        }
    }

    /// Render the result text under the dial
    fn render_result(&self, ui: &mut egui::Ui) {
        let Some(result) = &self.state.result else {
            ui.label("Enter weight and height, then press Calculate.");
            return;
        };

        ui.label(format!("BMI: {:.2}", result.value));
        ui.colored_label(
            result.category.color(),
            format!("Category: {}", result.category.label()),
        );
    }

    /// Render the modal error dialog for invalid input
    fn render_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = self.state.ui.error.clone() else {
            return;
        };

        egui::Window::new("Input Error")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        self.state.ui.error = None;
                    }
                });
            });
    }

    /// Render the advisory dialog shown for the severe obesity category
    fn render_advisory_dialog(&mut self, ctx: &egui::Context) {
        if !self.state.ui.show_advisory {
            return;
        }

        egui::Window::new("Warning")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("You are in the severe obesity range. Please consult a doctor.");
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        self.state.ui.show_advisory = false;
                    }
                });
            });
    }
}

impl eframe::App for BmiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dialog_open = self.state.ui.error.is_some() || self.state.ui.show_advisory;

        egui::CentralPanel::default().show(ctx, |ui| {
            // The form is inert while a dialog is up
            ui.add_enabled_ui(!dialog_open, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(10.0);
                    ui.heading("BMI Calculator");
                    ui.add_space(12.0);

                    self.render_input_form(ui);

                    ui.add_space(10.0);
                    dial_widget::dial(ui, self.state.result.as_ref());
                    ui.add_space(6.0);

                    self.render_result(ui);
                });
            });
        });

        self.render_error_dialog(ctx);
        self.render_advisory_dialog(ctx);
    }
}
