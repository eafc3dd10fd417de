use crate::checks::{base_name, is_script, CheckFailed, FailureKind};
use crate::config::LinterConfig;
use std::fs;
use std::path::Path;

/// Scripts must carry an execute bit.
pub fn check_file(path: &Path, _config: &LinterConfig) -> Result<(), CheckFailed> {
    if !is_script(path) {
        return Ok(());
    }

    if !is_executable(path) {
        return Err(CheckFailed::new(
            FailureKind::NotExecutable,
            format!("The file '{}' is not executable.", base_name(path)),
        ));
    }
    Ok(())
}

#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}
