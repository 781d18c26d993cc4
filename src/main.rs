//! BMI console calculator
//!
//! Computes Body Mass Index from weight and height given on the command line
//! and prints the classification with a position scale.
//!
//! Usage:
//!   bmi 70 175

use bmi_dial::{compute, create_scale};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "bmi")]
#[command(about = "Compute Body Mass Index from weight and height", long_about = None)]
struct Args {
    /// Body weight in kilograms
    weight_kg: String,

    /// Body height in centimeters
    height_cm: String,
}

// BMI range shown on the console scale
const SCALE_MIN: f64 = 10.0;
const SCALE_MAX: f64 = 45.0;
const SCALE_WIDTH: usize = 40;

fn main() {
    let args = Args::parse();

    // Validation happens in the library so the error names the field
    let result = match compute(&args.weight_kg, &args.height_cm) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("BMI Calculator");
    println!("==============");
    println!(
        "Weight: {} kg | Height: {} cm",
        args.weight_kg.trim(),
        args.height_cm.trim()
    );
    println!();
    println!("BMI: {:.2} ({})", result.value, result.category.label());
    println!(
        "  {} [{}] {}",
        SCALE_MIN,
        create_scale(result.value, SCALE_MIN, SCALE_MAX, SCALE_WIDTH),
        SCALE_MAX
    );

    if result.category.needs_advisory() {
        println!();
        println!("Advisory: BMI is in the severe obesity range. Please consult a doctor.");
    }
}
