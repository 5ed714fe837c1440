//! # Cantbm CLI Application
//!
//! Terminal interface for cantilever beam SF/BM diagrams. Collects the
//! beam geometry and loads interactively, runs the analysis, prints the
//! tabulated diagram and appends the same report to `cantbm.out`.
//!
//! Input sequence: span and segment count first, then intensity +
//! position per concentrated load, then intensity + start + length per
//! UDL.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::ExitCode;

use cantbm_core::calculations::cantilever::{analyze, BeamSpec};
use cantbm_core::loads::{DistributedLoad, PointLoad};
use cantbm_core::report;

/// Report file appended to on every successful run
const REPORT_PATH: &str = "cantbm.out";

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

fn prompt_usize(prompt: &str, default: usize) -> usize {
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

fn main() -> ExitCode {
    println!("Cantbm CLI - Cantilever Beam SF/BM Diagrams");
    println!("===========================================");
    println!();

    let span = prompt_f64("Enter beam span [6.0]: ", 6.0);
    let segment_count = prompt_usize("Enter number of segments [6]: ", 6);
    let mut spec = BeamSpec::new(span, segment_count);

    let nc = prompt_usize("Number of concentrated loads [0]: ", 0);
    for i in 1..=nc {
        println!("Concentrated load {} of {}:", i, nc);
        let intensity = prompt_f64("  Intensity: ", 0.0);
        let position = prompt_f64("  Position from free end: ", 0.0);
        spec.add_point_load(PointLoad::new(intensity, position));
    }

    let nu = prompt_usize("Number of uniformly distributed loads [0]: ", 0);
    for i in 1..=nu {
        println!("UDL {} of {}:", i, nu);
        let intensity = prompt_f64("  Intensity: ", 0.0);
        let start = prompt_f64("  Distance from free end: ", 0.0);
        let length = prompt_f64("  Loaded length: ", 0.0);
        spec.add_distributed_load(DistributedLoad::new(intensity, start, length));
    }

    let results = match analyze(&spec) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            return ExitCode::FAILURE;
        }
    };

    println!();
    print!("{}", report::render_report(&results));
    println!();

    match report::append_report(Path::new(REPORT_PATH), &results) {
        Ok(()) => println!("Report appended to {}", REPORT_PATH),
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    }

    println!();
    println!("JSON Output (for LLM/API use):");
    if let Ok(json) = serde_json::to_string_pretty(&results) {
        println!("{}", json);
    }

    ExitCode::SUCCESS
}
