//! Error types for pdfmerger.
//!
//! Two layers of errors exist:
//!
//! - [`MergeError`] is what a user action can end in: too few inputs, a
//!   cancelled save dialog, or a failure inside the PDF library.
//! - [`PdfMergerError`] covers everything else the crate can run into
//!   (reading and writing documents, terminal I/O, invalid configuration).
//!   Load and write failures are folded into [`MergeError::MergeFailed`] at
//!   the executor boundary.

use std::io;
use std::path::PathBuf;

/// Result type alias for pdfmerger operations.
pub type Result<T> = std::result::Result<T, PdfMergerError>;

/// Outcome of a failed merge request.
///
/// None of these are fatal: the session reports them and keeps its
/// selection unchanged.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MergeError {
    /// Fewer than two files are selected.
    #[error("{}", insufficient_inputs_message(.count))]
    InsufficientInputs {
        /// Number of files that were selected.
        count: usize,
    },

    /// The save dialog was cancelled or returned an empty path.
    #[error("Merge cancelled: no output file selected")]
    OutputNotSelected,

    /// The PDF library failed while loading an input or writing the output.
    #[error("An error occurred: {reason}")]
    MergeFailed {
        /// Message of the underlying failure.
        reason: String,
    },
}

fn insufficient_inputs_message(count: &usize) -> &'static str {
    if *count == 0 {
        "No PDFs selected to merge"
    } else {
        "Select at least two PDFs"
    }
}

impl MergeError {
    /// Create a MergeFailed error.
    pub fn merge_failed(reason: impl Into<String>) -> Self {
        Self::MergeFailed {
            reason: reason.into(),
        }
    }
}

/// Main error type for pdfmerger operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfMergerError {
    /// Input file does not exist.
    #[error("File not found: {}", .path.display())]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// Path exists but is not a regular file.
    #[error("Not a file: {}", .path.display())]
    NotAFile {
        /// Offending path.
        path: PathBuf,
    },

    /// The PDF library could not parse the file.
    #[error("Failed to load PDF: {}\n  Reason: {reason}", .path.display())]
    FailedToLoadPdf {
        /// Path to the PDF file.
        path: PathBuf,
        /// Reason reported by the library.
        reason: String,
    },

    /// PDF file is encrypted and cannot be processed.
    #[error(
        "PDF is encrypted and cannot be processed: {}\n  Hint: Decrypt the PDF first using 'qpdf --decrypt' or similar tools",
        .path.display()
    )]
    EncryptedPdf {
        /// Path to the encrypted PDF.
        path: PathBuf,
    },

    /// PDF parsed but has no usable page tree.
    #[error("Corrupted or invalid PDF: {}\n  Details: {details}", .path.display())]
    CorruptedPdf {
        /// Path to the PDF.
        path: PathBuf,
        /// What is wrong with it.
        details: String,
    },

    /// Failed to create the output file.
    #[error("Failed to create output file: {}\n  Reason: {source}", .path.display())]
    FailedToCreateOutput {
        /// Path where output should be created.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to write to the output file.
    #[error("Failed to write to output file: {}\n  Reason: {source}", .path.display())]
    FailedToWrite {
        /// Path being written to.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A file pattern could not be expanded.
    #[error("Invalid file pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// Pattern as typed.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A line typed at the prompt is not a valid command.
    #[error("Invalid command '{input}': {reason}")]
    InvalidCommand {
        /// Line as typed.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A merge request failed.
    #[error(transparent)]
    Merge(#[from] MergeError),

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of what's wrong with the configuration.
        message: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },

    /// Generic error with a custom message.
    #[error("{message}")]
    Other {
        /// Error message.
        message: String,
    },
}

impl From<lopdf::Error> for PdfMergerError {
    fn from(err: lopdf::Error) -> Self {
        Self::other(err.to_string())
    }
}

impl PdfMergerError {
    /// Create a FileNotFound error.
    pub fn file_not_found(path: PathBuf) -> Self {
        Self::FileNotFound { path }
    }

    /// Create a NotAFile error.
    pub fn not_a_file(path: PathBuf) -> Self {
        Self::NotAFile { path }
    }

    /// Create a FailedToLoadPdf error.
    pub fn failed_to_load_pdf(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::FailedToLoadPdf {
            path,
            reason: reason.into(),
        }
    }

    /// Create an EncryptedPdf error.
    pub fn encrypted_pdf(path: PathBuf) -> Self {
        Self::EncryptedPdf { path }
    }

    /// Create a CorruptedPdf error.
    pub fn corrupted_pdf(path: PathBuf, details: impl Into<String>) -> Self {
        Self::CorruptedPdf {
            path,
            details: details.into(),
        }
    }

    /// Create an InvalidConfig error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an Other error with a custom message.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. } | Self::NotAFile { .. } => 2,
            Self::FailedToLoadPdf { .. }
            | Self::EncryptedPdf { .. }
            | Self::CorruptedPdf { .. } => 3,
            Self::FailedToCreateOutput { .. } | Self::FailedToWrite { .. } | Self::Io { .. } => 5,
            Self::Merge(_) => 6,
            Self::InvalidPattern { .. }
            | Self::InvalidCommand { .. }
            | Self::InvalidConfig { .. }
            | Self::Other { .. } => 1,
        }
    }
}
