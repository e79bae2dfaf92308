//! Message formatting and display.
//!
//! This module provides formatted output for different message types
//! with support for quiet and verbose modes.
//!
//! # Examples
//!
//! ```
//! use pdfmerger::output::formatter::{OutputFormatter, MessageLevel};
//!
//! let formatter = OutputFormatter::new(false, false);
//! formatter.info("Processing files...");
//! formatter.success("Operation completed");
//! formatter.message(MessageLevel::Error, "Something went wrong");
//! ```

use crate::config::Config;
use std::io::{self, Write};

/// Level of output message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Informational message.
    Info,
    /// Success message.
    Success,
    /// Warning message.
    Warning,
    /// Error message.
    Error,
    /// Debug/verbose message.
    Debug,
}

impl MessageLevel {
    fn decoration(self) -> (&'static str, &'static str) {
        match self {
            Self::Info => ("", ""),
            Self::Success => ("✓ ", "\x1b[32m"), // Green
            Self::Warning => ("⚠ ", "\x1b[33m"), // Yellow
            Self::Error => ("✗ ", "\x1b[31m"),   // Red
            Self::Debug => ("→ ", "\x1b[36m"),   // Cyan
        }
    }
}

/// Output formatter with configurable verbosity.
#[derive(Debug, Clone)]
pub struct OutputFormatter {
    /// Whether to suppress non-error output.
    quiet: bool,
    /// Whether to show verbose output.
    verbose: bool,
    /// Whether to use colored output.
    colored: bool,
}

impl OutputFormatter {
    /// Create a new output formatter.
    ///
    /// # Arguments
    ///
    /// * `quiet` - Suppress non-error output
    /// * `verbose` - Show verbose output
    pub fn new(quiet: bool, verbose: bool) -> Self {
        Self {
            quiet,
            verbose,
            colored: Self::should_use_color(),
        }
    }

    /// Create a formatter from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.quiet, config.verbose)
    }

    /// Create a quiet formatter (only errors and warnings).
    pub fn quiet() -> Self {
        Self::new(true, false)
    }

    /// Detect if colored output should be used.
    ///
    /// Returns true if stdout is a TTY and TERM is set.
    fn should_use_color() -> bool {
        use std::io::IsTerminal;
        io::stdout().is_terminal() && std::env::var("TERM").is_ok()
    }

    /// Whether a message of `level` is shown under the current settings.
    pub fn is_enabled(&self, level: MessageLevel) -> bool {
        match level {
            MessageLevel::Warning | MessageLevel::Error => true,
            MessageLevel::Debug => self.verbose,
            MessageLevel::Info | MessageLevel::Success => !self.quiet,
        }
    }

    /// Print a message at `level`, honouring quiet and verbose modes.
    pub fn message(&self, level: MessageLevel, message: &str) {
        if self.is_enabled(level) {
            println!("{}", self.render(level, message));
        }
    }

    /// Print an informational message. Suppressed in quiet mode.
    pub fn info(&self, message: &str) {
        self.message(MessageLevel::Info, message);
    }

    /// Print a success message. Suppressed in quiet mode.
    pub fn success(&self, message: &str) {
        self.message(MessageLevel::Success, message);
    }

    /// Print a warning message. Always displayed.
    pub fn warning(&self, message: &str) {
        self.message(MessageLevel::Warning, message);
    }

    /// Print an error message. Always displayed.
    pub fn error(&self, message: &str) {
        self.message(MessageLevel::Error, message);
    }

    /// Print a debug message. Only displayed in verbose mode.
    pub fn debug(&self, message: &str) {
        self.message(MessageLevel::Debug, message);
    }

    /// Format a message with its level prefix and, on a TTY, colour.
    pub fn render(&self, level: MessageLevel, message: &str) -> String {
        let (prefix, color_code) = level.decoration();
        let reset = "\x1b[0m";

        if self.colored && !color_code.is_empty() {
            format!("{color_code}{prefix}{message}{reset}")
        } else {
            format!("{prefix}{message}")
        }
    }

    /// Print a section header. Suppressed in quiet mode.
    pub fn section(&self, title: &str) {
        if !self.quiet {
            println!("\n{title}");
        }
    }

    /// Print a labelled detail line. Only shown in verbose mode.
    pub fn detail(&self, label: &str, value: &str) {
        if self.verbose {
            println!("    {label}: {value}");
        }
    }

    /// Print a numbered list item. Suppressed in quiet mode.
    ///
    /// # Arguments
    ///
    /// * `index` - Item index (1-based)
    /// * `message` - Item message
    pub fn list_item(&self, index: usize, message: &str) {
        if !self.quiet {
            println!("  {index}. {message}");
        }
    }

    /// Print a prompt without a trailing newline.
    ///
    /// Prompts ask for input, so they are shown even in quiet mode.
    pub fn prompt(&self, text: &str) {
        print!("{text}");
        io::stdout().flush().ok();
    }

    /// Check if verbose output should be shown.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Check if quiet mode is enabled.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl Default for OutputFormatter {
    fn default() -> Self {
        Self::new(false, false)
    }
}
