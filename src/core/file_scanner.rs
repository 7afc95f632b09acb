use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use glob::Pattern;
use walkdir::WalkDir;

/// Result of expanding the source arguments.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Files to scan, in argument order with directories walked by file name.
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Expand source arguments into the list of files to scan.
///
/// A file argument is always kept, even if it does not exist, so that the
/// read error surfaces later with the offending path. A directory argument is
/// walked recursively, keeping files whose extension is in `extensions` and
/// dropping paths that match one of `ignore_patterns`.
pub fn collect_source_files(
    sources: &[PathBuf],
    extensions: &[String],
    ignore_patterns: &[String],
) -> ScanResult {
    let glob_patterns: Vec<Pattern> = ignore_patterns
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                tracing::warn!(pattern = %p, error = %e, "invalid ignore pattern");
                None
            }
        })
        .collect();

    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut result = ScanResult::default();

    for source in sources {
        if !source.is_dir() {
            if seen.insert(source.clone()) {
                result.files.push(source.clone());
            }
            continue;
        }

        for entry in WalkDir::new(source).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    result.skipped_count += 1;
                    tracing::warn!(error = %e, "cannot access path");
                    continue;
                }
            };
            let path = entry.path();
            let path_str = path.to_string_lossy();

            if glob_patterns.iter().any(|p| p.matches(&path_str)) {
                continue;
            }

            if entry.file_type().is_file()
                && has_extension(path, extensions)
                && seen.insert(path.to_path_buf())
            {
                result.files.push(path.to_path_buf());
            }
        }
    }

    tracing::debug!(
        files = result.files.len(),
        skipped = result.skipped_count,
        "collected source files"
    );
    result
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
