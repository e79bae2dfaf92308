//! Configuration module for pdfmerger.
//!
//! Turns parsed CLI arguments into a validated [`Config`] that drives the
//! session: which files to preload, how chatty the output is and how the
//! merged document is written.

use crate::cli::Cli;
use crate::error::{PdfMergerError, Result};
use crate::io::WriteOptions;
use std::path::PathBuf;

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Files or glob patterns added to the selection at startup.
    pub inputs: Vec<PathBuf>,

    /// Verbose output mode.
    pub verbose: bool,

    /// Quiet mode - suppress non-error output.
    pub quiet: bool,

    /// Compress streams in the merged PDF.
    pub compress: bool,

    /// Write through a temporary file and rename.
    pub atomic: bool,

    /// Print merge reports as JSON.
    pub json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            verbose: false,
            quiet: false,
            compress: true,
            atomic: true,
            json: false,
        }
    }
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if verbose and quiet modes are both enabled.
    pub fn validate(&self) -> Result<()> {
        if self.verbose && self.quiet {
            return Err(PdfMergerError::invalid_config(
                "Cannot use both --verbose and --quiet",
            ));
        }
        Ok(())
    }

    /// Options for writing the merged document.
    pub fn write_options(&self) -> WriteOptions {
        WriteOptions {
            atomic: self.atomic,
            compress: self.compress,
            ..Default::default()
        }
    }
}

impl TryFrom<&Cli> for Config {
    type Error = PdfMergerError;

    fn try_from(cli: &Cli) -> Result<Self> {
        let config = Self {
            inputs: cli.inputs.clone(),
            verbose: cli.verbose,
            quiet: cli.quiet,
            compress: !cli.no_compress,
            atomic: !cli.no_atomic,
            json: cli.json,
        };
        config.validate()?;
        Ok(config)
    }
}
