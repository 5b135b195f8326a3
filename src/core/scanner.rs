use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::WalkDir;

/// Files discovered under the source directory.
pub struct ScanResult {
    /// Matching files in lexicographic path order.
    pub files: Vec<PathBuf>,
    /// Files with the right extension that an ignore pattern excluded.
    pub ignored_count: usize,
}

/// Recursively collect every file under `source_dir` ending in `.{extension}`.
///
/// Ignore patterns are matched against the path relative to `root`. Any
/// directory entry that cannot be read fails the whole scan.
pub fn scan_files(
    root: &Path,
    source_dir: &Path,
    extension: &str,
    ignore_patterns: &[Pattern],
) -> Result<ScanResult> {
    let mut files = Vec::new();
    let mut ignored_count = 0;

    for entry in WalkDir::new(source_dir) {
        let entry = entry
            .with_context(|| format!("Cannot access path under {}", source_dir.display()))?;
        let path = entry.path();

        // Follows symlinks to files; linked directories are not descended into
        if !path.is_file() || !has_extension(path, extension) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        if ignore_patterns.iter().any(|p| p.matches_path(relative)) {
            ignored_count += 1;
            continue;
        }

        files.push(path.to_path_buf());
    }

    // PathBuf ordering is component-wise, so `a/x.rs` sorts before `a.rs`
    files.sort();

    Ok(ScanResult {
        files,
        ignored_count,
    })
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(&format!(".{}", extension)))
}
