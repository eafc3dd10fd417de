use crate::checks::{base_name, CheckFailed, FailureKind};
use crate::config::LinterConfig;
use std::path::Path;

/// True if some lowercase letter is directly followed by an uppercase one.
pub fn looks_camel_case(name: &str) -> bool {
    let chars: Vec<char> = name.chars().collect();
    chars.windows(2).any(|pair| {
        let (a, b) = (pair[0], pair[1]);
        a.is_alphabetic() && b.is_alphabetic() && a.is_lowercase() && b.is_uppercase()
    })
}

/// Only the base name is inspected. Shares the `enforce_no_tabs` gate.
pub fn check_file(path: &Path, config: &LinterConfig) -> Result<(), CheckFailed> {
    if !config.enforce_no_tabs {
        return Ok(());
    }

    let name = base_name(path);
    if looks_camel_case(&name) {
        return Err(CheckFailed::new(
            FailureKind::BadNaming,
            format!(
                "Invalid filename '{}' uses CamelCase instead of underscored_file_names.",
                name
            ),
        ));
    }
    Ok(())
}
