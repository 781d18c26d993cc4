//! Console display utilities

use crate::bmi::CATEGORY_THRESHOLDS;

/// Create a horizontal scale line with a position marker
///
/// Category boundaries inside the range are drawn as `|`, the value as `^`.
/// Values outside the range are clamped to the scale ends.
///
/// # Arguments
/// * `value` - The value to mark
/// * `min` - Left end of the scale
/// * `max` - Right end of the scale
/// * `width` - Total width in characters
///
/// # Example
/// ```
/// use bmi_dial::create_scale;
///
/// // Mark a BMI of 22.9 on a 10-45 scale, 40 chars wide
/// let scale = create_scale(22.9, 10.0, 45.0, 40);
/// println!("[{}]", scale);
/// ```
pub fn create_scale(value: f64, min: f64, max: f64, width: usize) -> String {
    let width = width.max(2);
    let mut chars = vec!['-'; width];

    let position = |v: f64| -> usize {
        let normalized = ((v - min) / (max - min)).clamp(0.0, 1.0);
        (normalized * (width - 1) as f64).round() as usize
    };

    for threshold in CATEGORY_THRESHOLDS {
        if threshold > min && threshold < max {
            chars[position(threshold)] = '|';
        }
    }
    chars[position(value)] = '^';

    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_width() {
        let scale = create_scale(22.9, 10.0, 45.0, 40);
        assert_eq!(scale.chars().count(), 40);
        assert!(scale.contains('^'));
    }

    #[test]
    fn test_scale_marker_at_ends() {
        let scale = create_scale(10.0, 10.0, 45.0, 40);
        assert!(scale.starts_with('^'));

        // Values beyond the range clamp to the ends
        let scale = create_scale(60.0, 10.0, 45.0, 40);
        assert!(scale.ends_with('^'));
    }

    #[test]
    fn test_scale_marker_at_midpoint() {
        let scale = create_scale(50.0, 0.0, 100.0, 41);
        assert_eq!(scale.chars().nth(20), Some('^'));
    }

    #[test]
    fn test_scale_draws_thresholds() {
        let scale = create_scale(10.0, 10.0, 45.0, 80);
        // 18.5, 25, 30 and 35 all fall inside a 10-45 range
        assert_eq!(scale.chars().filter(|&c| c == '|').count(), 4);
    }
}
