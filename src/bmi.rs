//! BMI computation and classification

use crate::error::{InputField, Result, ValidationError};

// Category thresholds (kg/m²). Intervals are half-open: a value equal to a
// threshold belongs to the category above it.
const UNDERWEIGHT_MAX: f64 = 18.5;
const NORMAL_MAX: f64 = 25.0;
const OVERWEIGHT_MAX: f64 = 30.0;
const OBESE_MAX: f64 = 35.0;

/// Category boundaries in ascending order, for display scales
pub const CATEGORY_THRESHOLDS: [f64; 4] = [UNDERWEIGHT_MAX, NORMAL_MAX, OVERWEIGHT_MAX, OBESE_MAX];

/// A validated weight/height measurement
///
/// Both values are guaranteed finite and strictly positive. Measurements
/// are transient; nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    weight_kg: f64,
    height_cm: f64,
}

impl Measurement {
    /// Create a measurement from numeric values
    ///
    /// # Errors
    /// Returns [`ValidationError::NotANumber`] for non-finite values and
    /// [`ValidationError::NonPositive`] for values <= 0.
    pub fn new(weight_kg: f64, height_cm: f64) -> Result<Self> {
        validate(weight_kg, InputField::Weight)?;
        validate(height_cm, InputField::Height)?;
        Ok(Self {
            weight_kg,
            height_cm,
        })
    }

    /// Create a measurement from raw user input
    ///
    /// Both fields are trimmed before parsing. The error names the first
    /// offending field, weight checked before height.
    ///
    /// # Example
    /// ```
    /// use bmi_dial::Measurement;
    ///
    /// let m = Measurement::from_input("70", "175")?;
    /// assert_eq!(m.weight_kg(), 70.0);
    /// # Ok::<(), bmi_dial::ValidationError>(())
    /// ```
    pub fn from_input(weight: &str, height: &str) -> Result<Self> {
        let weight_kg = parse_field(weight, InputField::Weight)?;
        let height_cm = parse_field(height, InputField::Height)?;
        Self::new(weight_kg, height_cm)
    }

    /// Weight in kilograms
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Height in centimeters
    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    /// Compute the BMI result for this measurement
    ///
    /// `bmi = weight_kg / (height_cm / 100)^2`. Infallible: the measurement
    /// was validated on construction.
    pub fn bmi(&self) -> BmiResult {
        let height_m = self.height_cm / 100.0;
        let value = self.weight_kg / (height_m * height_m);
        BmiResult {
            value,
            category: BmiCategory::from_value(value),
        }
    }
}

fn parse_field(input: &str, field: InputField) -> Result<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| ValidationError::NotANumber {
            field,
            input: input.to_string(),
        })
}

fn validate(value: f64, field: InputField) -> Result<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            field,
            input: value.to_string(),
        });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositive { field, value });
    }
    Ok(())
}

/// BMI classification categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
    SevereObesity,
}

impl BmiCategory {
    /// Classify a BMI value
    pub fn from_value(value: f64) -> Self {
        if value < UNDERWEIGHT_MAX {
            BmiCategory::Underweight
        } else if value < NORMAL_MAX {
            BmiCategory::Normal
        } else if value < OVERWEIGHT_MAX {
            BmiCategory::Overweight
        } else if value < OBESE_MAX {
            BmiCategory::Obese
        } else {
            BmiCategory::SevereObesity
        }
    }

    /// Display text for the category
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
            BmiCategory::SevereObesity => "Severe obesity",
        }
    }

    /// Whether this category warrants an advisory notice
    ///
    /// True only for [`BmiCategory::SevereObesity`]; the GUI raises a
    /// warning dialog and the console binary prints an advisory line.
    pub fn needs_advisory(&self) -> bool {
        matches!(self, BmiCategory::SevereObesity)
    }

    /// All categories in ascending BMI order
    pub fn all() -> [BmiCategory; 5] {
        [
            BmiCategory::Underweight,
            BmiCategory::Normal,
            BmiCategory::Overweight,
            BmiCategory::Obese,
            BmiCategory::SevereObesity,
        ]
    }
}

/// A computed BMI value with its classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiResult {
    /// BMI value in kg/m²
    pub value: f64,
    /// Category the value falls into
    pub category: BmiCategory,
}

/// Parse, validate and compute in one step
///
/// Convenience entry point for UI code holding raw text inputs.
///
/// # Example
/// ```
/// use bmi_dial::{compute, BmiCategory};
///
/// let result = compute("70", "175")?;
/// assert_eq!(result.category, BmiCategory::Normal);
/// # Ok::<(), bmi_dial::ValidationError>(())
/// ```
pub fn compute(weight: &str, height: &str) -> Result<BmiResult> {
    Ok(Measurement::from_input(weight, height)?.bmi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formula_normal_weight() {
        let result = compute("70", "175").unwrap();
        assert!((result.value - 22.857).abs() < 1e-2);
        assert_eq!(result.category, BmiCategory::Normal);
        assert!(!result.category.needs_advisory());
    }

    #[test]
    fn test_formula_severe_obesity() {
        let result = compute("120", "170").unwrap();
        assert!((result.value - 41.52).abs() < 1e-2);
        assert_eq!(result.category, BmiCategory::SevereObesity);
        assert!(result.category.needs_advisory());
    }

    #[test]
    fn test_formula_matches_definition() {
        let m = Measurement::new(82.5, 168.0).unwrap();
        let expected = 82.5 / (1.68 * 1.68);
        assert!((m.bmi().value - expected).abs() < 1e-9);
    }

    #[test]
    fn test_category_boundaries() {
        // Half-open intervals: threshold values belong to the upper category
        let cases = [
            (18.4, BmiCategory::Underweight),
            (18.5, BmiCategory::Normal),
            (24.9, BmiCategory::Normal),
            (25.0, BmiCategory::Overweight),
            (29.9, BmiCategory::Overweight),
            (30.0, BmiCategory::Obese),
            (34.9, BmiCategory::Obese),
            (35.0, BmiCategory::SevereObesity),
        ];
        for (value, expected) in cases {
            assert_eq!(BmiCategory::from_value(value), expected, "value {value}");
        }
    }

    #[test]
    fn test_non_numeric_input() {
        let err = compute("abc", "175").unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NotANumber {
                field: InputField::Weight,
                ..
            }
        ));

        let err = compute("70", "").unwrap_err();
        assert_eq!(err.field(), InputField::Height);
    }

    #[test]
    fn test_non_finite_input() {
        // "inf" and "NaN" parse as f64 but are not finite real numbers
        assert!(matches!(
            compute("inf", "175").unwrap_err(),
            ValidationError::NotANumber { .. }
        ));
        assert!(matches!(
            compute("70", "NaN").unwrap_err(),
            ValidationError::NotANumber { .. }
        ));
    }

    #[test]
    fn test_non_positive_input() {
        let err = compute("0", "175").unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonPositive {
                field: InputField::Weight,
                value: 0.0
            }
        );

        let err = compute("70", "-175").unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonPositive {
                field: InputField::Height,
                value: -175.0
            }
        );
    }

    #[test]
    fn test_input_is_trimmed() {
        let result = compute(" 70 ", "\t175\n").unwrap();
        assert_eq!(result.category, BmiCategory::Normal);
    }

    #[test]
    fn test_weight_checked_before_height() {
        let err = compute("abc", "xyz").unwrap_err();
        assert_eq!(err.field(), InputField::Weight);
    }
}
