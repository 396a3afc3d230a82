use std::{
    collections::HashSet,
    path::{Component, Path, PathBuf},
};

use glob::{Pattern, glob};
use tracing::warn;
use walkdir::WalkDir;

/// File extension of gettext catalogs picked up from directories.
pub const CATALOG_EXTENSION: &str = "po";

/// Check if an input contains glob wildcards (* or ?).
/// Inputs without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Result of resolving catalog inputs to files.
#[derive(Debug, Default)]
pub struct CatalogFiles {
    pub files: Vec<PathBuf>,
    /// Directory entries that could not be accessed while walking.
    pub skipped_count: usize,
}

/// Resolve catalog inputs (files, directories or glob patterns) into a list
/// of catalog files.
///
/// Relative inputs are resolved against `base_dir`. Literal paths that are not
/// directories are kept as-is without checking that they exist, so reading
/// them later reports the real I/O error. Paths are normalized lexically,
/// files matching any of `ignores` are dropped and duplicates keep their
/// first position.
pub fn collect_catalog_files(base_dir: &Path, inputs: &[String], ignores: &[String]) -> CatalogFiles {
    let ignore_patterns: Vec<Pattern> = ignores
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                warn!(pattern = %p, error = %e, "invalid ignore pattern");
                None
            }
        })
        .collect();

    let normalized_base = normalize_path(base_dir);
    let mut result = CatalogFiles::default();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for input in inputs {
        let candidates = if is_glob_pattern(input) {
            expand_glob(base_dir, input)
        } else {
            let path = base_dir.join(input);
            if path.is_dir() {
                walk_catalog_dir(&path, &mut result.skipped_count)
            } else {
                vec![path]
            }
        };

        for path in candidates {
            let path = normalize_path(&path);
            if is_ignored(&path, &normalized_base, &ignore_patterns) {
                continue;
            }
            if seen.insert(path.clone()) {
                result.files.push(path);
            }
        }
    }

    result
}

fn expand_glob(base_dir: &Path, pattern: &str) -> Vec<PathBuf> {
    let full_pattern = base_dir.join(pattern);
    let pattern_str = full_pattern.to_string_lossy();

    let mut paths: Vec<PathBuf> = match glob(&pattern_str) {
        Ok(entries) => entries.flatten().filter(|entry| entry.is_file()).collect(),
        Err(e) => {
            warn!(pattern = %pattern, error = %e, "invalid glob pattern");
            return Vec::new();
        }
    };

    if paths.is_empty() {
        warn!(pattern = %pattern, "glob pattern matched no catalog files");
    }
    paths.sort();
    paths
}

fn walk_catalog_dir(dir: &Path, skipped_count: &mut usize) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                *skipped_count += 1;
                warn!(error = %e, "cannot access path");
                continue;
            }
        };
        let path = entry.path();
        if path.is_file() && is_catalog_file(path) {
            paths.push(path.to_path_buf());
        }
    }

    paths
}

/// Lexically drop `.` components and fold `name/..` pairs.
///
/// Leading `..` components and the root are kept. Symlinks are not resolved.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}

fn is_catalog_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(CATALOG_EXTENSION)
}

fn is_ignored(path: &Path, base_dir: &Path, patterns: &[Pattern]) -> bool {
    let relative = path.strip_prefix(base_dir).unwrap_or(path);
    patterns
        .iter()
        .any(|p| p.matches_path(relative) || p.matches_path(path))
}
