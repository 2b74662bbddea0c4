//! # SteelSpan CLI Application
//!
//! Terminal front end for simply supported steel beam design.
//! Prompts for span, load, and grade, prints the design summary, and
//! dumps the result as JSON for scripting or LLM use.

use std::io::{self, BufRead, Write};

use beam_core::calculations::beam::{calculate, BeamInput};
use beam_core::loads::{BeamLoad, LoadKind};
use beam_core::materials::SteelGrade;

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return None;
    }

    Some(input.trim().to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

fn prompt_load_kind(default: LoadKind) -> LoadKind {
    println!("Load type:");
    for (i, kind) in LoadKind::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, kind.display_name());
    }

    match prompt_line("Select [1]: ").as_deref() {
        Some("2") => LoadKind::PointLoad,
        Some("1") | Some("") => LoadKind::Udl,
        _ => default,
    }
}

fn prompt_grade(default: SteelGrade) -> SteelGrade {
    let choices = SteelGrade::ALL
        .iter()
        .map(|g| g.code())
        .collect::<Vec<_>>()
        .join("/");

    match prompt_line(&format!("Material grade ({}) [A36]: ", choices)) {
        Some(s) if !s.is_empty() => SteelGrade::from_str_flexible(&s).unwrap_or(default),
        _ => default,
    }
}

fn main() {
    println!("SteelSpan CLI - Steel Beam Design Calculator");
    println!("============================================");
    println!();

    let span_m = prompt_f64("Enter beam span (m) [4.0]: ", 4.0);
    let kind = prompt_load_kind(LoadKind::Udl);
    let magnitude = prompt_f64(
        &format!("Enter load magnitude ({}) [10.0]: ", kind.units_label()),
        10.0,
    );
    let grade = prompt_grade(SteelGrade::A36);

    let load = match kind {
        LoadKind::Udl => BeamLoad::udl(magnitude),
        LoadKind::PointLoad => BeamLoad::point(magnitude),
    };

    let beam = BeamInput {
        label: "CLI-Beam".to_string(),
        span_m,
        load,
        grade,
    };

    println!();
    match calculate(&beam) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  BEAM DESIGN SUMMARY");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Span:     {:.2} m", beam.span_m);
            println!(
                "  Load:     {:.2} {} ({})",
                magnitude,
                kind.units_label(),
                kind.code()
            );
            println!(
                "  Material: {} (Fy = {:.0} MPa)",
                grade.display_name(),
                result.yield_strength_mpa
            );
            println!();
            println!("Demand:");
            println!("  M_max = {:.2} kNm", result.max_moment_knm());
            println!("  V_max = {:.2} kN", result.max_shear_kn());
            println!();
            println!("Required Section:");
            println!(
                "  S_req = {:.2} mm³ (φ = {:.2})",
                result.required_modulus_mm3, result.resistance_factor
            );
            println!();
            println!("Compare with standard W-sections from the AISC Manual.");
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
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
