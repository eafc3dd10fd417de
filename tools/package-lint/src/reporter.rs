use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::checks::CheckOutcome;
use crate::report::{Report, ReportEntry};

pub fn print_header() {
    println!(
        "{}",
        "\n=== Package Conformance ===\n".if_supports_color(Stdout, |s| s.bold())
    );
}

pub fn print_result(entry: &ReportEntry) {
    match &entry.outcome {
        Some(CheckOutcome::Ok) => {
            println!(
                "{} {}: {}",
                "\u{2713}".if_supports_color(Stdout, |s| s.green()),
                entry.display_name,
                "clean".if_supports_color(Stdout, |s| s.green()),
            );
        }
        Some(CheckOutcome::Failed(failed)) => {
            println!(
                "{} {}: {}",
                "\u{2717}".if_supports_color(Stdout, |s| s.red()),
                entry.display_name,
                failed.compact.if_supports_color(Stdout, |s| s.red()),
            );
            println!();
            println!(
                "  {}",
                entry.diagnosis.message.if_supports_color(Stdout, |s| s.yellow())
            );
            for line in failed.long_explanation.lines() {
                println!("  {}", line.if_supports_color(Stdout, |s| s.dimmed()));
            }
            println!();
        }
        None => {
            println!(
                "{} {}: {}",
                "-".if_supports_color(Stdout, |s| s.dimmed()),
                entry.display_name,
                "not run".if_supports_color(Stdout, |s| s.dimmed()),
            );
        }
    }
}

pub fn print_summary(report: &Report) -> bool {
    let failed = report.failures().count();
    let total = report.len();

    println!(
        "{}",
        "\n--- Summary ---".if_supports_color(Stdout, |s| s.bold())
    );

    if report.all_passed() {
        println!(
            "{}",
            format!("\nAll {}/{} checks passed.\n", total, total)
                .if_supports_color(Stdout, |s| s.green()),
        );
        true
    } else {
        println!(
            "{}",
            format!("\n{}/{} check(s) failed.\n", failed, total)
                .if_supports_color(Stdout, |s| s.red()),
        );
        false
    }
}

pub fn print_json(report: &Report) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}
