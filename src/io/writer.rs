//! PDF writing and saving operations.
//!
//! By default the document is serialised into a temporary file next to the
//! target and renamed over it once complete, so a failed write never leaves
//! a truncated file at the target path.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerger::io::PdfWriter;
//! use lopdf::Document;
//! use std::path::Path;
//!
//! # fn example(mut doc: Document) -> pdfmerger::Result<()> {
//! let stats = PdfWriter::new().save(&mut doc, Path::new("output.pdf"))?;
//! println!("Wrote {} bytes", stats.file_size);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfMergerError, Result};

/// Options for writing PDF files.
#[derive(Debug, Clone)]
pub struct WriteOptions {
    /// Use atomic writes (write to temp file, then rename).
    pub atomic: bool,

    /// Compress the PDF before writing.
    pub compress: bool,

    /// Buffer size for writing (in bytes).
    pub buffer_size: usize,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            atomic: true,
            compress: true,
            buffer_size: 8192,
        }
    }
}

/// Statistics about a write operation.
#[derive(Debug, Clone)]
pub struct WriteStatistics {
    /// Time taken to write the file.
    pub write_time: Duration,

    /// Size of the written file in bytes.
    pub file_size: u64,

    /// Path where the file was written.
    pub output_path: PathBuf,
}

/// PDF writer with configurable behavior.
#[derive(Debug, Clone, Default)]
pub struct PdfWriter {
    options: WriteOptions,
}

impl PdfWriter {
    /// Create a new PDF writer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom options.
    pub fn with_options(options: WriteOptions) -> Self {
        Self { options }
    }

    /// Save a PDF document to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The output directory cannot be created
    /// - The output (or its temporary sibling) cannot be created
    /// - Serialisation or the final rename fails
    pub fn save(&self, doc: &mut Document, path: &Path) -> Result<WriteStatistics> {
        let start = Instant::now();

        if self.options.compress {
            doc.compress();
        }

        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&parent).map_err(|e| PdfMergerError::FailedToCreateOutput {
            path: path.to_path_buf(),
            source: e,
        })?;

        if self.options.atomic {
            // Dropping the temp file on any error below removes it.
            let temp = tempfile::Builder::new()
                .prefix(".pdfmerger-")
                .suffix(".tmp")
                .tempfile_in(&parent)
                .map_err(|e| PdfMergerError::FailedToCreateOutput {
                    path: path.to_path_buf(),
                    source: e,
                })?;

            self.serialize(doc, temp.as_file(), path)?;

            temp.persist(path).map_err(|e| PdfMergerError::FailedToWrite {
                path: path.to_path_buf(),
                source: e.error,
            })?;
        } else {
            let file = File::create(path).map_err(|e| PdfMergerError::FailedToCreateOutput {
                path: path.to_path_buf(),
                source: e,
            })?;
            self.serialize(doc, &file, path)?;
        }

        let file_size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);

        Ok(WriteStatistics {
            write_time: start.elapsed(),
            file_size,
            output_path: path.to_path_buf(),
        })
    }

    fn serialize(&self, doc: &mut Document, file: &File, path: &Path) -> Result<()> {
        let mut writer = BufWriter::with_capacity(self.options.buffer_size, file);

        doc.save_to(&mut writer)
            .map_err(|e| PdfMergerError::FailedToWrite {
                path: path.to_path_buf(),
                source: std::io::Error::other(e),
            })?;

        writer.flush().map_err(|e| PdfMergerError::FailedToWrite {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.sync_all().map_err(|e| PdfMergerError::FailedToWrite {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
