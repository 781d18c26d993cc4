//! Body Mass Index calculator library
//!
//! This library holds the domain logic behind the `bmi` console tool and the
//! `bmi-gui` desktop application: input validation, BMI computation and
//! classification, and the geometry of the analog dial the GUI paints.
//!
//! # Quick Start
//!
//! ## Computing from user input
//! ```
//! use bmi_dial::{compute, BmiCategory};
//!
//! let result = compute("70", "175")?;
//!
//! println!("BMI: {:.2}", result.value);
//! println!("Category: {}", result.category.label());
//! assert_eq!(result.category, BmiCategory::Normal);
//! # Ok::<(), bmi_dial::ValidationError>(())
//! ```
//!
//! ## Validating numeric values directly
//! ```
//! use bmi_dial::Measurement;
//!
//! let measurement = Measurement::new(120.0, 170.0)?;
//! let result = measurement.bmi();
//!
//! if result.category.needs_advisory() {
//!     println!("Advisory: consult a doctor.");
//! }
//! # Ok::<(), bmi_dial::ValidationError>(())
//! ```
//!
//! ## Dial geometry
//! ```
//! use bmi_dial::{dial, BmiCategory};
//! use egui::pos2;
//!
//! // Needle for a Normal result points straight up
//! let tip = dial::needle_tip(pos2(0.0, 0.0), 100.0, BmiCategory::Normal);
//! assert!(tip.y < 0.0);
//! ```

pub mod bmi;
pub mod common;
pub mod dial;
pub mod error;

// Re-export public API
pub use bmi::{compute, BmiCategory, BmiResult, Measurement};
pub use common::create_scale;
pub use error::{InputField, Result, ValidationError};
