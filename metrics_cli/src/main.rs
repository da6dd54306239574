//! # BodyMetrics CLI Application
//!
//! Terminal front-end for the metabolic metrics engine. This shell owns the
//! caller-side responsibilities: parsing raw text into numbers, rejecting
//! non-numeric or non-positive input before invoking the engine, and
//! rendering category tags to readable text.

use std::io::{self, BufRead, Write};

use metrics_core::calculations::bmr::Gender;
use metrics_core::calculations::report::{calculate, MetricsInput, WeightGoal};
use metrics_core::units::UnitSystem;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();

    let mut input = String::new();
    let _ = io::stdin().lock().read_line(&mut input);
    input.trim().to_string()
}

fn main() {
    println!("BodyMetrics CLI - Metabolic Metrics Calculator");
    println!("==============================================");
    println!();

    let units = UnitSystem::from_str_flexible(&prompt_line("Units [metric/imperial] (metric): "))
        .unwrap_or(UnitSystem::Metric);
    let gender = Gender::from_str_flexible(&prompt_line("Gender [male/female] (male): "))
        .unwrap_or(Gender::Male);

    let age = prompt_f64("Age in years [30]: ", 30.0);
    let (weight_default, height_default) = match units {
        UnitSystem::Metric => (80.0, 170.0),
        UnitSystem::Imperial => (176.0, 67.0),
    };
    let weight = prompt_f64(
        &format!("Weight ({}) [{}]: ", units.weight_unit(), weight_default),
        weight_default,
    );
    let height = prompt_f64(
        &format!("Height ({}) [{}]: ", units.height_unit(), height_default),
        height_default,
    );

    // Reject garbage before it reaches the engine
    for (name, value) in [("age", age), ("weight", weight), ("height", height)] {
        if !value.is_finite() || value <= 0.0 {
            eprintln!("Error: {} must be a positive number", name);
            std::process::exit(1);
        }
    }

    let input = MetricsInput {
        weight,
        height,
        age,
        gender,
        units,
    };

    println!();
    println!("Calculating metrics for a {}...", gender.display_name().to_lowercase());
    println!();

    match calculate(&input) {
        Ok(report) => {
            let weight_unit = units.weight_unit();

            println!("═══════════════════════════════════════");
            println!("  METABOLIC METRICS RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Current:");
            println!("  BMR:  {:.2} kcal/day", report.bmr);
            println!("  BMI:  {:.2} ({})", report.bmi, report.bmi_category);
            println!();
            println!("Target (BMI 21.5):");
            println!("  Weight:        {:.2} {}", report.target_weight, weight_unit);
            println!("  BMR at target: {:.2} kcal/day", report.target_bmr);

            if report.goal != WeightGoal::Maintain {
                let (direction, weekly_pace) = match (report.goal, units) {
                    (WeightGoal::Gain, UnitSystem::Metric) => ("surplus", "0.5 kg"),
                    (WeightGoal::Gain, UnitSystem::Imperial) => ("surplus", "1 lb"),
                    (_, UnitSystem::Metric) => ("deficit", "0.5 kg"),
                    (_, UnitSystem::Imperial) => ("deficit", "1 lb"),
                };

                println!();
                println!("Projection ({}):", report.goal);
                match report.estimated_days() {
                    Some(days) => {
                        println!("  Estimated {} days to target", days);
                        println!(
                            "  Assumes a 500 kcal/day {}, about {} per week",
                            direction, weekly_pace
                        );
                    }
                    None => {
                        println!("  Past the two-year horizon - not practically estimable");
                    }
                }
            }

            println!();
            println!("Recommended macros (per day):");
            println!("  Protein: {} g", report.macros.protein_g);
            println!("  Fat:     {} g", report.macros.fat_g);
            println!("  Carbs:   {} g", report.macros.carbs_g);
            println!();
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&report) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
