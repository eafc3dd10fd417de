use crate::walker;
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub const MANIFEST_FILE: &str = "package.xml";

static NAME_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<name>\s*([^<\s]+)\s*</name>").unwrap());

/// One checkable unit: a directory subtree and the name it is known by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Package {
    pub name: String,
    pub directory: PathBuf,
}

impl Package {
    pub fn new(name: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            directory: directory.into(),
        }
    }

    /// Build a package from its directory, naming it from `package.xml` when
    /// it declares a `<name>`, otherwise after the directory itself.
    pub fn from_dir(directory: impl AsRef<Path>) -> Self {
        let directory = directory.as_ref();
        let name = manifest_name(directory).unwrap_or_else(|| dir_name(directory));
        Self::new(name, directory)
    }
}

/// Every directory below `root` holding a `package.xml`, sorted by name.
pub fn discover_packages(root: &Path) -> Vec<Package> {
    let mut packages: Vec<Package> = walker::collect_dirs_with(root, MANIFEST_FILE)
        .into_iter()
        .map(Package::from_dir)
        .collect();
    packages.sort_by(|a, b| a.name.cmp(&b.name).then(a.directory.cmp(&b.directory)));
    packages
}

fn manifest_name(directory: &Path) -> Option<String> {
    let content = fs::read_to_string(directory.join(MANIFEST_FILE)).ok()?;
    NAME_ELEMENT
        .captures(&content)
        .and_then(|c| c.get(1).map(|m| m.as_str().to_string()))
}

fn dir_name(directory: &Path) -> String {
    directory
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| directory.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, content: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn name_comes_from_manifest() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("some_dir");
        write(
            &dir.join(MANIFEST_FILE),
            "<package>\n  <name>lane_control</name>\n  <version>1.0.0</version>\n</package>\n",
        );

        let package = Package::from_dir(&dir);
        assert_eq!(package.name, "lane_control");
        assert_eq!(package.directory, dir);
    }

    #[test]
    fn name_falls_back_to_directory() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("fallback_pkg");
        write(&dir.join(MANIFEST_FILE), "<package></package>");

        assert_eq!(Package::from_dir(&dir).name, "fallback_pkg");
    }

    #[test]
    fn discovers_packages_sorted_by_name() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path();
        write(&root.join("src/10-zeta/package.xml"), "<name>alpha</name>");
        write(&root.join("src/20-alpha/package.xml"), "<name>zeta</name>");
        write(&root.join("src/not_a_package/setup.py"), "");

        let names: Vec<String> = discover_packages(root).into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }
}
