use std::path::Path;

use anyhow::{Context, Result};
use glob::{Pattern, glob};
use walkdir::WalkDir;

/// Check if a path expression contains glob metacharacters.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains(['*', '?', '[', ']'])
}

/// Resolve a path expression into an ordered list of candidate files.
///
/// - A directory is walked recursively; every regular file whose name ends
///   with `extension` is returned, sorted by path. Paths matching one of the
///   `ignores` patterns are skipped.
/// - Otherwise, a pattern with glob metacharacters is expanded. An empty
///   expansion falls back to the literal path.
/// - Anything else is returned unchanged as a single-element list.
///
/// Walk and glob errors (permissions, I/O) abort the scan.
pub fn scan_files(path: &str, extension: &str, ignores: &[Pattern]) -> Result<Vec<String>> {
    if Path::new(path).is_dir() {
        return walk_dir(path, extension, ignores);
    }

    if is_glob_pattern(path) {
        let files = expand_glob(path)?;
        if !files.is_empty() {
            return Ok(files);
        }
    }

    Ok(vec![path.to_string()])
}

fn walk_dir(dir: &str, extension: &str, ignores: &[Pattern]) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Cannot access path under {}", dir))?;
        let path_str = entry.path().to_string_lossy();

        if ignores.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if entry.file_type().is_file() && path_str.ends_with(extension) {
            files.push(path_str.into_owned());
        }
    }

    // Walk order is per-directory; sort so the whole list is ordered by full path.
    files.sort();
    Ok(files)
}

fn expand_glob(pattern: &str) -> Result<Vec<String>> {
    let entries = glob(pattern).with_context(|| format!("Invalid glob pattern: {}", pattern))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.with_context(|| format!("Cannot access path matching {}", pattern))?;
        files.push(path.to_string_lossy().into_owned());
    }
    files.sort();
    Ok(files)
}
