use crate::checks::{base_name, read_file, CheckFailed, FailureKind};
use crate::config::LinterConfig;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static CONFLICT_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<{4}|>{4}").unwrap());

/// Four or more `<` or `>` in a row.
pub fn has_conflict_marker(content: &str) -> bool {
    CONFLICT_MARKER.is_match(content)
}

pub fn check_file(path: &Path, _config: &LinterConfig) -> Result<(), CheckFailed> {
    let content = read_file(path)?;
    if has_conflict_marker(&content) {
        return Err(CheckFailed::new(
            FailureKind::MergeMarkerFound,
            format!("It looks like the file '{}' has been half-merged.", base_name(path)),
        ));
    }
    Ok(())
}
