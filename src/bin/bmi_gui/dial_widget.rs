//! Custom-painted analog BMI dial

use bmi_dial::dial::{
    arc_points, needle_tip, BAND_STROKE_WIDTH, DIAL_BACKGROUND, DIAL_BANDS, NEEDLE_INSET,
    NEEDLE_STROKE_WIDTH,
};
use bmi_dial::BmiResult;
use eframe::egui::{self, Sense, Shape, Stroke, Vec2};

/// Widget side length in points
const DIAL_SIZE: f32 = 300.0;

/// Margin between the dial circle and the allocated rect
const DIAL_MARGIN: f32 = 20.0;

/// Paint the dial into the next available region
///
/// Stateless: the whole widget is redrawn from `result` every frame. The
/// needle is omitted until a result exists, and its angle comes from the
/// category, one of five discrete positions.
pub fn dial(ui: &mut egui::Ui, result: Option<&BmiResult>) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(DIAL_SIZE), Sense::hover());

    if !ui.is_rect_visible(rect) {
        return response;
    }

    let painter = ui.painter();
    let center = rect.center();
    let radius = rect.width().min(rect.height()) / 2.0 - DIAL_MARGIN;

    // Dial face
    painter.circle_filled(center, radius, DIAL_BACKGROUND);

    // Colored category bands
    for band in DIAL_BANDS {
        let points = arc_points(center, radius, band.start_deg, band.span_deg);
        painter.add(Shape::line(
            points,
            Stroke::new(BAND_STROKE_WIDTH, band.category.color()),
        ));
    }

    // Needle
    if let Some(result) = result {
        let tip = needle_tip(center, radius - NEEDLE_INSET, result.category);
        painter.line_segment(
            [center, tip],
            Stroke::new(NEEDLE_STROKE_WIDTH, result.category.color()),
        );
    }

    response
}
