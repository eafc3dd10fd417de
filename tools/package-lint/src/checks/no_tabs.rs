use crate::checks::{base_name, read_file, CheckFailed, FailureKind};
use crate::config::LinterConfig;
use std::path::Path;

pub fn count_tabs(content: &str) -> usize {
    content.chars().filter(|&c| c == '\t').count()
}

/// Gated by `enforce_no_tabs`.
pub fn check_file(path: &Path, config: &LinterConfig) -> Result<(), CheckFailed> {
    if !config.enforce_no_tabs {
        return Ok(());
    }

    let content = read_file(path)?;
    let tabs = count_tabs(&content);
    if tabs > 0 {
        return Err(CheckFailed::new(
            FailureKind::TabCharacterFound,
            format!("The file '{}' contains {} tab characters.", base_name(path), tabs),
        )
        .with_explanation(
            "The tab characters are evil in Python code.\n\
             Please be *very* careful in changing them.\n\
             Do *not* use a tool to do it (e.g. \"Convert tabs to spaces\"); it will get it wrong!",
        ));
    }
    Ok(())
}
