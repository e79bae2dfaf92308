//! PDF reading and loading operations.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerger::io::PdfReader;
//! use std::path::Path;
//!
//! # fn example() -> pdfmerger::Result<()> {
//! let loaded = PdfReader::new().load(Path::new("document.pdf"))?;
//! println!("Loaded {} pages in {:?}", loaded.page_count, loaded.load_time);
//! # Ok(())
//! # }
//! ```

use lopdf::Document;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::error::{PdfMergerError, Result};

/// A loaded PDF document with metadata.
#[derive(Debug)]
pub struct LoadedPdf {
    /// The PDF document.
    pub document: Document,

    /// Path to the source file.
    pub path: PathBuf,

    /// Number of pages in the document.
    pub page_count: usize,

    /// Time taken to load the document.
    pub load_time: Duration,
}

/// Loads input documents and rejects the ones a merge cannot use.
#[derive(Debug, Clone, Default)]
pub struct PdfReader;

impl PdfReader {
    /// Create a new PDF reader.
    pub fn new() -> Self {
        Self
    }

    /// Load a single PDF document.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - File does not exist or is a directory
    /// - File is not a valid PDF
    /// - PDF is encrypted
    /// - PDF has no pages
    pub fn load(&self, path: &Path) -> Result<LoadedPdf> {
        Self::check_path_exists(path)?;

        let start = Instant::now();

        let mut document = Document::load(path).map_err(|e| {
            let err_msg = e.to_string();
            let lowered = err_msg.to_lowercase();
            if lowered.contains("encrypt") || lowered.contains("password") {
                PdfMergerError::encrypted_pdf(path.to_path_buf())
            } else {
                PdfMergerError::failed_to_load_pdf(path.to_path_buf(), err_msg)
            }
        })?;

        // lopdf opens documents with an empty user password itself and only
        // warns about the rest, leaving their objects unreadable.
        if document.is_encrypted() {
            if document.encryption_state.is_none() {
                return Err(PdfMergerError::encrypted_pdf(path.to_path_buf()));
            }
            // Objects are decrypted in memory; the merged output is written in
            // the clear.
            document.trailer.remove(b"Encrypt");
            document.encryption_state = None;
        }

        let page_count = document.get_pages().len();
        if page_count == 0 {
            return Err(PdfMergerError::corrupted_pdf(
                path.to_path_buf(),
                "document has no pages",
            ));
        }

        Ok(LoadedPdf {
            document,
            path: path.to_path_buf(),
            page_count,
            load_time: start.elapsed(),
        })
    }

    /// Check that `path` exists and is not a directory.
    pub fn check_path_exists(path: &Path) -> Result<()> {
        let exists = path.try_exists()?;
        if !exists {
            return Err(PdfMergerError::file_not_found(path.to_path_buf()));
        }

        if path.is_dir() {
            return Err(PdfMergerError::not_a_file(path.to_path_buf()));
        }

        Ok(())
    }
}
