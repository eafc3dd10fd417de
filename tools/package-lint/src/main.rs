use clap::Parser;
use std::path::PathBuf;
use std::process;

use package_lint::config::LinterConfig;
use package_lint::package::{self, Package};
use package_lint::report::Report;
use package_lint::reporter;

#[derive(Parser)]
#[command(name = "package-lint", version, about = "Check packages for README, naming and script hygiene")]
struct Cli {
    /// Repository root (defaults to the nearest enclosing git checkout)
    #[arg(long)]
    root_dir: Option<PathBuf>,

    /// Config file (defaults to <root>/package-lint.json when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Check this package directory instead of discovering packages (repeatable)
    #[arg(long = "package", value_name = "DIR")]
    packages: Vec<PathBuf>,

    /// Only check the package with this name (repeatable)
    #[arg(long, value_name = "NAME")]
    only: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = match &cli.root_dir {
        Some(dir) => LinterConfig::from_root(dir),
        None => match LinterConfig::discover() {
            Some(c) => c,
            None => {
                eprintln!("Error: Could not find repository root. Run from within a git repository or use --root-dir.");
                process::exit(2);
            }
        },
    };

    let config = match &cli.config {
        Some(path) => config.with_file(path),
        None => config.with_default_file(),
    };
    let config = match config {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    let mut packages: Vec<Package> = if cli.packages.is_empty() {
        package::discover_packages(&config.root_dir)
    } else {
        cli.packages.iter().map(Package::from_dir).collect()
    };
    if !cli.only.is_empty() {
        packages.retain(|p| cli.only.contains(&p.name));
    }
    if packages.is_empty() {
        eprintln!("No packages found under {}.", config.root_dir.display());
    }

    let mut report = Report::new();
    for package in &packages {
        if let Err(e) = package_lint::register_package_checks(&mut report, package) {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    }

    let debug_timing = std::env::var("PACKAGE_LINT_TIMING").is_ok();
    if !cli.json {
        reporter::print_header();
    }

    // Stream results as each check completes
    report.run_with(&config, |entry| {
        if debug_timing {
            eprintln!("  [{:>6}ms] {}", entry.elapsed_ms, entry.display_name);
        }
        if !cli.json {
            reporter::print_result(entry);
        }
    });

    let all_passed = if cli.json {
        if let Err(e) = reporter::print_json(&report) {
            eprintln!("Error: {e}");
            process::exit(2);
        }
        report.all_passed()
    } else {
        reporter::print_summary(&report)
    };

    process::exit(if all_passed { 0 } else { 1 });
}
