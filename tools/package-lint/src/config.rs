use serde::Deserialize;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up at the root when no explicit `--config` is given.
pub const CONFIG_FILE_NAME: &str = "package-lint.json";

/// Directories that are never searched for packages or python files.
pub const GLOBAL_SKIP_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "target",
    "build",
    "devel",
    "install",
    "__pycache__",
    ".cache",
];

pub fn skip_dirs() -> HashSet<&'static str> {
    GLOBAL_SKIP_DIRS.iter().copied().collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// On-disk shape of `package-lint.json`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    enforce_no_tabs: Option<bool>,
    #[serde(default)]
    good_readme_exceptions: Vec<String>,
}

/// Run-wide settings. Read-only once the checks start.
#[derive(Debug, Clone)]
pub struct LinterConfig {
    pub root_dir: PathBuf,
    /// Gates both the tab and the file naming rules.
    pub enforce_no_tabs: bool,
    /// Packages whose README is not inspected.
    pub good_readme_exceptions: BTreeSet<String>,
}

impl LinterConfig {
    pub fn from_root(root: &Path) -> Self {
        Self {
            root_dir: root.to_path_buf(),
            enforce_no_tabs: true,
            good_readme_exceptions: BTreeSet::new(),
        }
    }

    /// Discover repo root by walking up from cwd to find .git directory
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            if dir.join(".git").exists() {
                return Some(Self::from_root(&dir));
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Apply `package-lint.json` from the root, if present.
    pub fn with_default_file(self) -> Result<Self, ConfigError> {
        let path = self.root_dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(self);
        }
        self.with_file(&path)
    }

    /// Apply the settings of a config file. A missing file is an error here.
    pub fn with_file(mut self, path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(enforce) = file.enforce_no_tabs {
            self.enforce_no_tabs = enforce;
        }
        self.good_readme_exceptions.extend(file.good_readme_exceptions);
        Ok(self)
    }

    pub fn is_readme_exception(&self, package_name: &str) -> bool {
        self.good_readme_exceptions.contains(package_name)
    }
}
