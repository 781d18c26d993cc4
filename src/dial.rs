//! Dial geometry: angular bands, needle placement and colors
//!
//! Pure presentational constants and math for the analog BMI dial. The GUI
//! widget strokes exactly what this module computes, so the geometry can be
//! tested without a display. Angles use the mathematical orientation:
//! 0° at 3 o'clock, counterclockwise positive, converted to screen
//! coordinates (y grows downward) at the point of sampling.

use crate::bmi::BmiCategory;
use egui::{pos2, Color32, Pos2};

/// Dial face background
pub const DIAL_BACKGROUND: Color32 = Color32::from_rgb(241, 250, 238);

/// Stroke width of the colored band arcs
pub const BAND_STROKE_WIDTH: f32 = 10.0;

/// Stroke width of the needle
pub const NEEDLE_STROKE_WIDTH: f32 = 3.0;

/// Needle length is the dial radius minus this inset
pub const NEEDLE_INSET: f32 = 10.0;

/// Angular step between sampled arc points, in degrees
const ARC_STEP_DEG: f32 = 3.0;

/// One colored angular segment of the dial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialBand {
    pub category: BmiCategory,
    pub start_deg: f32,
    pub span_deg: f32,
}

/// The five fixed bands, ascending category order from 30°
///
/// Band widths are static display constants and intentionally not derived
/// from the classification thresholds.
pub const DIAL_BANDS: [DialBand; 5] = [
    DialBand {
        category: BmiCategory::Underweight,
        start_deg: 30.0,
        span_deg: 30.0,
    },
    DialBand {
        category: BmiCategory::Normal,
        start_deg: 60.0,
        span_deg: 60.0,
    },
    DialBand {
        category: BmiCategory::Overweight,
        start_deg: 120.0,
        span_deg: 60.0,
    },
    DialBand {
        category: BmiCategory::Obese,
        start_deg: 180.0,
        span_deg: 60.0,
    },
    DialBand {
        category: BmiCategory::SevereObesity,
        start_deg: 240.0,
        span_deg: 60.0,
    },
];

impl BmiCategory {
    /// Band and needle color for this category
    pub fn color(&self) -> Color32 {
        match self {
            BmiCategory::Underweight => Color32::from_rgb(69, 123, 157),
            BmiCategory::Normal => Color32::from_rgb(42, 157, 143),
            BmiCategory::Overweight => Color32::from_rgb(233, 196, 106),
            BmiCategory::Obese => Color32::from_rgb(244, 162, 97),
            BmiCategory::SevereObesity => Color32::from_rgb(230, 57, 70),
        }
    }

    /// Fixed needle angle for this category, in degrees
    ///
    /// Five discrete positions, one per category; the needle is not
    /// interpolated from the BMI value.
    pub fn needle_angle_deg(&self) -> f32 {
        match self {
            BmiCategory::Underweight => 30.0,
            BmiCategory::Normal => 90.0,
            BmiCategory::Overweight => 150.0,
            BmiCategory::Obese => 210.0,
            BmiCategory::SevereObesity => 270.0,
        }
    }
}

/// Point on the dial circle at `angle_deg`, in screen coordinates
pub fn point_at(center: Pos2, radius: f32, angle_deg: f32) -> Pos2 {
    let rad = angle_deg.to_radians();
    pos2(center.x + radius * rad.cos(), center.y - radius * rad.sin())
}

/// Needle endpoint for a category at the given length
pub fn needle_tip(center: Pos2, length: f32, category: BmiCategory) -> Pos2 {
    point_at(center, length, category.needle_angle_deg())
}

/// Sample a band arc as a polyline
///
/// Deterministic: the same inputs always produce the same points. The first
/// and last points lie exactly on the band's start and end angles.
pub fn arc_points(center: Pos2, radius: f32, start_deg: f32, span_deg: f32) -> Vec<Pos2> {
    let steps = (span_deg / ARC_STEP_DEG).ceil().max(1.0) as usize;
    (0..=steps)
        .map(|i| {
            let angle = start_deg + span_deg * (i as f32 / steps as f32);
            point_at(center, radius, angle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn approx(a: Pos2, b: Pos2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn test_bands_are_contiguous() {
        for pair in DIAL_BANDS.windows(2) {
            assert_eq!(pair[0].start_deg + pair[0].span_deg, pair[1].start_deg);
        }
        let total: f32 = DIAL_BANDS.iter().map(|b| b.span_deg).sum();
        assert_eq!(total, 270.0);
        assert_eq!(DIAL_BANDS[0].start_deg, 30.0);
    }

    #[test]
    fn test_bands_cover_all_categories_in_order() {
        let categories: Vec<_> = DIAL_BANDS.iter().map(|b| b.category).collect();
        assert_eq!(categories, BmiCategory::all());
    }

    #[test]
    fn test_needle_angle_lies_in_own_band() {
        for band in DIAL_BANDS {
            let angle = band.category.needle_angle_deg();
            assert!(
                angle >= band.start_deg && angle <= band.start_deg + band.span_deg,
                "{:?}: needle at {}° outside band {}..{}°",
                band.category,
                angle,
                band.start_deg,
                band.start_deg + band.span_deg
            );
        }
    }

    #[test]
    fn test_point_at_cardinal_angles() {
        let center = pos2(100.0, 100.0);
        // 0° is 3 o'clock, 90° straight up (screen y decreases)
        assert!(approx(point_at(center, 50.0, 0.0), pos2(150.0, 100.0)));
        assert!(approx(point_at(center, 50.0, 90.0), pos2(100.0, 50.0)));
        assert!(approx(point_at(center, 50.0, 180.0), pos2(50.0, 100.0)));
        assert!(approx(point_at(center, 50.0, 270.0), pos2(100.0, 150.0)));
    }

    #[test]
    fn test_needle_tip_normal_points_up() {
        let center = pos2(0.0, 0.0);
        let tip = needle_tip(center, 90.0, BmiCategory::Normal);
        assert!(approx(tip, pos2(0.0, -90.0)));
    }

    #[test]
    fn test_arc_points_deterministic() {
        let center = pos2(150.0, 150.0);
        let a = arc_points(center, 130.0, 60.0, 60.0);
        let b = arc_points(center, 130.0, 60.0, 60.0);
        assert_eq!(a, b);
    }

    #[test]
    fn test_arc_points_span_endpoints() {
        let center = pos2(150.0, 150.0);
        let radius = 130.0;
        let points = arc_points(center, radius, 240.0, 60.0);
        assert!(points.len() >= 2);
        assert!(approx(points[0], point_at(center, radius, 240.0)));
        assert!(approx(
            *points.last().unwrap(),
            point_at(center, radius, 300.0)
        ));
        // Every sample sits on the circle
        for p in &points {
            let d = ((p.x - center.x).powi(2) + (p.y - center.y).powi(2)).sqrt();
            assert!((d - radius).abs() < EPS);
        }
    }
}
