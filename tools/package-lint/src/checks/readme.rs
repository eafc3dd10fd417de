use crate::checks::{read_file, CheckFailed, FailureKind};
use crate::config::LinterConfig;
use crate::package::Package;

pub const README_FILE: &str = "README.md";

/// Lines of the README quoted back when the heading is wrong.
const QUOTED_LINES: usize = 5;

/// The README must open with a level-1 heading carrying the package anchor:
///
/// ```text
/// # Lane control {#lane_control}
/// ```
pub fn check(package: &Package, config: &LinterConfig) -> Result<(), CheckFailed> {
    if config.is_readme_exception(&package.name) {
        return Ok(());
    }

    let path = package.directory.join(README_FILE);
    if !path.exists() {
        return Err(CheckFailed::new(
            FailureKind::MissingFile,
            format!("The README file for '{}' does not exist.", package.name),
        )
        .with_explanation(format!("File does not exist: {}", path.display())));
    }

    let content = read_file(&path)?;
    check_heading(&content, &package.name)
}

/// Validate the first non-blank line of README `content`.
pub fn check_heading(content: &str, package_name: &str) -> Result<(), CheckFailed> {
    let raw_lines: Vec<&str> = content.split('\n').collect();
    let first = raw_lines.iter().find(|line| !line.trim().is_empty());

    let problem = match first {
        None => Some((
            FailureKind::MalformedHeading,
            "The README is empty; expected a topic declaration.".to_string(),
        )),
        Some(line) if !line.starts_with("# ") => Some((
            FailureKind::MalformedHeading,
            "I expect the first line of the README to be a valid topic declaration.".to_string(),
        )),
        Some(line) => {
            let fragment = format!("{{#{}", package_name);
            if line.contains(&fragment) {
                None
            } else {
                Some((
                    FailureKind::MissingAnchor,
                    format!("Could not find '{}' in first line.", fragment),
                ))
            }
        }
    };

    match problem {
        None => Ok(()),
        Some((kind, reason)) => Err(CheckFailed::new(kind, format!("README problem: {}", reason))
            .with_explanation(quote_first_lines(&raw_lines))),
    }
}

fn quote_first_lines(raw_lines: &[&str]) -> String {
    let quoted: Vec<String> = raw_lines
        .iter()
        .take(QUOTED_LINES)
        .map(|line| format!("> {}", line))
        .collect();
    format!("First 5 lines are:\n{}", quoted.join("\n"))
}
