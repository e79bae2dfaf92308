//! pdfmerger - pick, order and merge PDF files into a single document.
//!
//! The library is split the way the program works:
//!
//! - [`selection`]: the ordered list of chosen files
//! - [`merge`]: the executor that concatenates them with `lopdf`
//! - [`session`]: the application session tying both to a front end
//! - [`surface`]: the front-end abstraction and its terminal implementation
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerger::config::Config;
//! use pdfmerger::session::Session;
//! use pdfmerger::surface::TerminalSurface;
//! use pdfmerger::output::OutputFormatter;
//!
//! # fn example() -> pdfmerger::Result<()> {
//! let config = Config::default();
//! let mut session = Session::new(&config);
//! let mut surface = TerminalSurface::stdin(OutputFormatter::from_config(&config));
//! pdfmerger::run_session(&mut session, &mut surface)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod io;
pub mod merge;
pub mod output;
pub mod selection;
pub mod session;
pub mod surface;
pub mod utils;

pub use config::Config;
pub use error::{MergeError, PdfMergerError, Result};

use clap::Parser;
use std::io::BufRead;

use crate::cli::Cli;
use crate::output::OutputFormatter;
use crate::session::{Command, Flow, Session};
use crate::surface::{TerminalSurface, collect_pdf_files};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Prompt shown while waiting for a command.
pub const PROMPT: &str = "pdfmerger> ";

/// Parse the command line and run an interactive session on stdin.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::try_from(&cli)?;
    let formatter = OutputFormatter::from_config(&config);

    formatter.section(&format!("{NAME} v{VERSION}"));
    formatter.info("Type 'help' for a list of commands.");

    let mut session = Session::new(&config);
    let mut surface = TerminalSurface::stdin(formatter.clone());

    if !config.inputs.is_empty() {
        let paths = collect_pdf_files(config.inputs.as_slice(), &formatter);
        session.add_paths(paths, &mut surface);
    }

    run_session(&mut session, &mut surface)
}

/// Read commands from `surface` and dispatch them until `quit` or end of
/// input.
///
/// Invalid commands are reported and skipped.
pub fn run_session<R: BufRead>(
    session: &mut Session,
    surface: &mut TerminalSurface<R>,
) -> Result<()> {
    while let Some(line) = surface.read_line(PROMPT)? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                surface.formatter().error(&err.to_string());
                continue;
            }
        };

        if session.dispatch(command, surface)? == Flow::Quit {
            break;
        }
    }

    Ok(())
}
