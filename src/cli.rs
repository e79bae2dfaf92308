//! CLI argument parsing for pdfmerger.
//!
//! The program is interactive; arguments only preload files and tune output.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerger::cli::Cli;
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! println!("Preloading {} files", cli.inputs.len());
//! ```

use clap::Parser;
use std::path::PathBuf;

/// Pick, order and merge PDF files into a single document.
///
/// Starts an interactive session. Files given on the command line are
/// added to the selection before the first prompt; type `help` at the
/// prompt for the available commands.
#[derive(Parser, Debug, Default)]
#[command(name = "pdfmerger")]
#[command(version)]
#[command(about = "Pick, order and merge PDF files into a single document", long_about = None)]
#[command(author)]
pub struct Cli {
    /// PDF files to add to the selection at startup (in order)
    ///
    /// Glob patterns are expanded. Non-PDF files are skipped.
    ///
    /// Examples:
    ///   pdfmerger chapter*.pdf
    ///   pdfmerger cover.pdf body.pdf
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Verbose output - show detailed information about each PDF and
    /// every merge state change
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    ///
    /// Prompts, warnings and errors are still shown.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Do not compress streams in the merged PDF
    #[arg(long)]
    pub no_compress: bool,

    /// Write the output file in place instead of through a temporary file
    ///
    /// Faster on some filesystems, but a failed write can leave a
    /// truncated file behind.
    #[arg(long)]
    pub no_atomic: bool,

    /// Print the merge report as JSON after a successful merge
    #[arg(long)]
    pub json: bool,
}
