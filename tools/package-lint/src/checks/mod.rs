pub mod executable;
pub mod naming;
pub mod no_half_merges;
pub mod no_tabs;
pub mod readme;
pub mod shebang;

use crate::config::LinterConfig;
use crate::package::Package;
use crate::walker;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Parent directory names that mark a python file as a runnable script.
pub const SCRIPT_DIRS: &[&str] = &["src", "scripts", "script"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureKind {
    MissingFile,
    MalformedHeading,
    MissingAnchor,
    MergeMarkerFound,
    TabCharacterFound,
    BadNaming,
    NotExecutable,
    MissingShebang,
    UnreadableFile,
    InvalidPattern,
}

/// A failed check. `compact` is the one-line summary, `long_explanation` the
/// detail shown under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{compact}")]
pub struct CheckFailed {
    pub kind: FailureKind,
    pub compact: String,
    pub long_explanation: String,
}

impl CheckFailed {
    /// The long explanation starts out equal to the compact message.
    pub fn new(kind: FailureKind, compact: impl Into<String>) -> Self {
        let compact = compact.into();
        Self {
            kind,
            long_explanation: compact.clone(),
            compact,
        }
    }

    pub fn with_explanation(mut self, long_explanation: impl Into<String>) -> Self {
        self.long_explanation = long_explanation.into();
        self
    }

    /// Same kind and compact message, explanation prefixed with the file.
    pub fn for_file(self, path: &Path) -> Self {
        let long_explanation = format!(
            "Check failed for file:\n    {}\n{}",
            path.display(),
            self.long_explanation
        );
        self.with_explanation(long_explanation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckOutcome {
    Ok,
    Failed(CheckFailed),
}

impl CheckOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, CheckOutcome::Ok)
    }
}

impl From<Result<(), CheckFailed>> for CheckOutcome {
    fn from(result: Result<(), CheckFailed>) -> Self {
        match result {
            Ok(()) => CheckOutcome::Ok,
            Err(failed) => CheckOutcome::Failed(failed),
        }
    }
}

/// Advisory text shown next to a check, fixed when the check is registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnosis {
    pub message: String,
}

impl Diagnosis {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Readme,
    NoHalfMerges,
    NoTabs,
    Naming,
    Executable,
    ShaBang,
}

impl Rule {
    /// Registration and run order.
    pub const ALL: [Rule; 6] = [
        Rule::Readme,
        Rule::NoHalfMerges,
        Rule::NoTabs,
        Rule::Naming,
        Rule::Executable,
        Rule::ShaBang,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rule::Readme => "README",
            Rule::NoHalfMerges => "NoHalfMerges",
            Rule::NoTabs => "NoTabs",
            Rule::Naming => "Naming",
            Rule::Executable => "Executable",
            Rule::ShaBang => "ShaBang",
        }
    }
}

/// One rule bound to one package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Check {
    pub rule: Rule,
    pub package: Package,
}

impl Check {
    pub fn new(rule: Rule, package: &Package) -> Self {
        Self {
            rule,
            package: package.clone(),
        }
    }

    /// Run the rule. Only reads the filesystem, so repeated calls over
    /// unchanged files agree.
    pub fn check(&self, config: &LinterConfig) -> Result<(), CheckFailed> {
        let file_check: fn(&Path, &LinterConfig) -> Result<(), CheckFailed> = match self.rule {
            Rule::Readme => return readme::check(&self.package, config),
            Rule::NoHalfMerges => no_half_merges::check_file,
            Rule::NoTabs => no_tabs::check_file,
            Rule::Naming => naming::check_file,
            Rule::Executable => executable::check_file,
            Rule::ShaBang => shebang::check_file,
        };

        let files =
            walker::locate_files(&self.package.directory, walker::PYTHON_GLOB).map_err(|e| {
                CheckFailed::new(
                    FailureKind::InvalidPattern,
                    format!("Could not search for '{}' files.", walker::PYTHON_GLOB),
                )
                .with_explanation(e.to_string())
            })?;
        for file in files {
            file_check(&file, config).map_err(|e| e.for_file(&file))?;
        }
        Ok(())
    }
}

/// True when the file's immediate parent is one of [`SCRIPT_DIRS`].
pub fn is_script(path: &Path) -> bool {
    path.parent()
        .and_then(|p| p.file_name())
        .is_some_and(|name| SCRIPT_DIRS.iter().any(|dir| name == *dir))
}

pub(crate) fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub(crate) fn read_file(path: &Path) -> Result<String, CheckFailed> {
    fs::read_to_string(path).map_err(|e| {
        CheckFailed::new(
            FailureKind::UnreadableFile,
            format!("Could not read the file '{}'.", base_name(path)),
        )
        .with_explanation(format!("Error reading {}: {}", path.display(), e))
    })
}
