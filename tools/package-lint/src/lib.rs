pub mod checks;
pub mod config;
pub mod package;
pub mod report;
pub mod reporter;
pub mod walker;

use checks::{Check, Diagnosis, Rule};
use config::LinterConfig;
use package::Package;
use report::{Report, ReportError};

pub fn display_name(package: &Package, rule: Rule) -> String {
    format!("Package {}: {}", package.name, rule.name())
}

/// Register the six package rules, in their fixed order, on `report`.
pub fn register_package_checks(report: &mut Report, package: &Package) -> Result<(), ReportError> {
    for rule in Rule::ALL {
        report.add(
            None,
            &display_name(package, rule),
            Check::new(rule, package),
            Diagnosis::new(format!("Something invalid for package {}.", package.name)),
        )?;
    }
    Ok(())
}

/// Register and run every check for `packages`, in the order given.
pub fn run_all_checks(packages: &[Package], config: &LinterConfig) -> Result<Report, ReportError> {
    let mut report = Report::new();
    for package in packages {
        register_package_checks(&mut report, package)?;
    }
    report.run(config);
    Ok(report)
}
