use crate::checks::{base_name, is_script, read_file, CheckFailed, FailureKind};
use crate::config::LinterConfig;
use std::path::Path;

pub const PYTHON_SHEBANG: &str = "#!/usr/bin/env python";

/// Applies to scripts only; the line may appear anywhere in the file.
pub fn check_file(path: &Path, _config: &LinterConfig) -> Result<(), CheckFailed> {
    if !is_script(path) {
        return Ok(());
    }

    let content = read_file(path)?;
    if !content.contains(PYTHON_SHEBANG) {
        return Err(CheckFailed::new(
            FailureKind::MissingShebang,
            format!("File '{}' does not contain #! line.", base_name(path)),
        ));
    }
    Ok(())
}
