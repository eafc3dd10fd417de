use crate::config;
use globset::{Glob, GlobMatcher};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Base-name pattern of the files the per-file rules inspect.
pub const PYTHON_GLOB: &str = "*.py";

/// Recursively collect files whose base name matches `pattern`. The whole
/// tree is searched; results are sorted so runs are reproducible.
pub fn locate_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, globset::Error> {
    let matcher = Glob::new(pattern)?.compile_matcher();
    let mut results = Vec::new();
    collect_files_inner(dir, &matcher, &mut results);
    results.sort();
    Ok(results)
}

fn collect_files_inner(dir: &Path, matcher: &GlobMatcher, results: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files_inner(&path, matcher, results);
        } else if path.is_file() && matcher.is_match(entry.file_name()) {
            results.push(path);
        }
    }
}

/// Collect directories below `dir` (inclusive) that directly contain a file
/// called `marker`. Matching directories are still descended into.
pub fn collect_dirs_with(dir: &Path, marker: &str) -> Vec<PathBuf> {
    let skip_dirs = config::skip_dirs();
    let mut results = Vec::new();
    collect_dirs_inner(dir, marker, &skip_dirs, &mut results);
    results.sort();
    results
}

fn collect_dirs_inner(
    dir: &Path,
    marker: &str,
    skip_dirs: &HashSet<&str>,
    results: &mut Vec<PathBuf>,
) {
    if dir.join(marker).is_file() {
        results.push(dir.to_path_buf());
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if !skip_dirs.contains(&*name) {
            collect_dirs_inner(&path, marker, skip_dirs, results);
        }
    }
}
