//! Terminal front end.
//!
//! Prompts stand in for the file picker and the save dialog; notices and the
//! row list are printed through the [`OutputFormatter`].

use std::io::{self, BufRead, StdinLock};
use std::path::PathBuf;

use super::{InteractionSurface, Notice, collect_pdf_files};
use crate::Result;
use crate::output::OutputFormatter;
use crate::selection::SelectedFile;
use crate::utils::with_default_extension;

/// [`InteractionSurface`] backed by a line-oriented input and stdout.
pub struct TerminalSurface<R> {
    input: R,
    formatter: OutputFormatter,
}

impl TerminalSurface<StdinLock<'static>> {
    /// Surface reading from the process's standard input.
    pub fn stdin(formatter: OutputFormatter) -> Self {
        Self::new(io::stdin().lock(), formatter)
    }
}

impl<R: BufRead> TerminalSurface<R> {
    /// Surface reading answers from `input`.
    pub fn new(input: R, formatter: OutputFormatter) -> Self {
        Self { input, formatter }
    }

    /// Formatter used for prompts and notices.
    pub fn formatter(&self) -> &OutputFormatter {
        &self.formatter
    }

    /// Show `prompt` and read one line without its line ending.
    ///
    /// Returns `None` once the input is exhausted.
    pub fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.formatter.prompt(prompt);

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

impl<R: BufRead> InteractionSurface for TerminalSurface<R> {
    fn pick_files(&mut self) -> Result<Vec<PathBuf>> {
        let Some(answer) = self.read_line("Select PDF(s) (paths or globs, empty to cancel): ")?
        else {
            return Ok(Vec::new());
        };

        let Some(words) = shlex::split(&answer) else {
            self.formatter.warning("Unbalanced quotes in file list");
            return Ok(Vec::new());
        };

        Ok(collect_pdf_files(&words, &self.formatter))
    }

    fn pick_save_path(&mut self) -> Result<Option<PathBuf>> {
        let Some(answer) = self.read_line("Save merged PDF as (empty to cancel): ")? else {
            return Ok(None);
        };
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }

        // A single quoted word loses its quotes; anything else is taken verbatim.
        let raw = match shlex::split(answer) {
            Some(mut words) if words.len() == 1 => words.remove(0),
            _ => answer.to_owned(),
        };
        let path = with_default_extension(PathBuf::from(raw));
        Ok(Some(std::path::absolute(&path).unwrap_or(path)))
    }

    fn notify(&mut self, notice: Notice) {
        self.formatter.message(notice.level, &notice.message);
    }

    fn show_selection(&mut self, files: &[SelectedFile]) {
        if self.formatter.is_quiet() {
            return;
        }

        self.formatter.section("Selected Files");
        if files.is_empty() {
            self.formatter.info("  (none)");
        }
        for (idx, file) in files.iter().enumerate() {
            self.formatter.list_item(idx + 1, &file.display_name);
            self.formatter.detail("Path", &file.path.display().to_string());
        }
    }
}
