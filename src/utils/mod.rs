//! Utilities for path collection and display.

use crate::{Result, error::PdfMergerError};
use std::path::{Path, PathBuf};

/// Extension the file picker filters for and the save dialog suggests.
pub const PDF_EXTENSION: &str = "pdf";

/// Expand multiple glob patterns into filesystem paths.
///
/// Accepts anything iterable with items that convert to `&str`, e.g.:
/// `&[&str]`, `Vec<String>`, or `Vec<&str>`.
///
/// Returns a flattened list of resolved paths, pattern by pattern, in the
/// order the patterns were given. A pattern without wildcards yields the
/// path itself if it exists and nothing otherwise.
///
/// Errors:
/// - Propagates `glob` parse errors.
/// - Propagates filesystem errors from glob iterator.
pub fn collect_paths_for_patterns<T>(patterns: T) -> Result<Vec<PathBuf>>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut resolved_paths = Vec::new();

    for pattern in patterns.into_iter() {
        let paths = collect_paths_for_pattern(pattern)?;
        resolved_paths.extend(paths);
    }

    Ok(resolved_paths)
}

/// Expand a single glob pattern into filesystem paths.
///
/// Pattern examples:
/// - `"**/*.pdf"`
/// - `"./docs/*.pdf"`
fn collect_paths_for_pattern<P: AsRef<str>>(pattern: P) -> Result<Vec<PathBuf>> {
    let pattern = pattern.as_ref();
    let mut resolved_paths = Vec::new();

    let paths = glob::glob(pattern).map_err(|err| PdfMergerError::InvalidPattern {
        pattern: pattern.to_owned(),
        reason: err.to_string(),
    })?;

    for entry in paths {
        let path = entry.map_err(|err| PdfMergerError::InvalidPattern {
            pattern: pattern.to_owned(),
            reason: err.to_string(),
        })?;
        resolved_paths.push(path);
    }

    Ok(resolved_paths)
}

/// Whether the path carries a `.pdf` extension (case-insensitive).
pub fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(PDF_EXTENSION))
}

/// Append the `.pdf` extension when the path has none.
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(PDF_EXTENSION)
    }
}

/// Format file size as human-readable string.
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{size} bytes")
    }
}
