//! The interaction surface: everything the session needs from a front end.
//!
//! The session never talks to a terminal or a window directly. It asks an
//! [`InteractionSurface`] to pick input files, pick a save path, show the
//! current rows and display notices, which keeps the selection and merge
//! logic testable without any UI present.

pub mod terminal;

pub use terminal::TerminalSurface;

use crate::Result;
use crate::output::{MessageLevel, OutputFormatter};
use crate::selection::SelectedFile;
use crate::utils::{collect_paths_for_patterns, has_pdf_extension};
use std::path::{Path, PathBuf};

/// A user-facing notice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity, which decides how the notice is rendered.
    pub level: MessageLevel,
    /// Text shown to the user.
    pub message: String,
}

impl Notice {
    /// Create a notice.
    pub fn new(level: MessageLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    /// Informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, message)
    }

    /// Success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, message)
    }

    /// Warning notice.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, message)
    }

    /// Error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, message)
    }
}

/// Front-end capabilities used by the session.
pub trait InteractionSurface {
    /// Let the user pick input PDFs. An empty result means nothing was
    /// picked (including cancellation).
    fn pick_files(&mut self) -> Result<Vec<PathBuf>>;

    /// Let the user pick where to save the merged PDF. `None` means the
    /// dialog was cancelled.
    fn pick_save_path(&mut self) -> Result<Option<PathBuf>>;

    /// Show a notice.
    fn notify(&mut self, notice: Notice);

    /// Show the current rows. Called after every change to the selection.
    fn show_selection(&mut self, _files: &[SelectedFile]) {}
}

/// Whether a word typed by the user contains glob wildcards.
pub fn is_glob_pattern(word: &str) -> bool {
    word.contains(['*', '?', '['])
}

/// Turn typed words or given paths into absolute PDF paths, in the order
/// given.
///
/// Inputs with wildcards are expanded; anything else is taken as a path
/// as-is, without checking that it exists. Anything without a `.pdf`
/// extension is skipped with a warning, and so are patterns that fail to
/// expand.
pub fn collect_pdf_files<P: AsRef<Path>>(
    inputs: &[P],
    formatter: &OutputFormatter,
) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for input in inputs {
        let input = input.as_ref();
        let candidates = match input.to_str() {
            Some(pattern) if is_glob_pattern(pattern) => {
                match collect_paths_for_patterns([pattern]) {
                    Ok(paths) => paths,
                    Err(err) => {
                        formatter.warning(&err.to_string());
                        continue;
                    }
                }
            }
            _ => vec![input.to_path_buf()],
        };

        for path in candidates {
            if !has_pdf_extension(&path) {
                formatter.warning(&format!("Skipping non-PDF file: {}", path.display()));
                continue;
            }
            files.push(std::path::absolute(&path).unwrap_or(path));
        }
    }

    files
}
