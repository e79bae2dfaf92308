//! The application session.
//!
//! A [`Session`] owns the selection and the merge executor for one run of
//! the program. Front ends hand it an [`InteractionSurface`] for every call
//! instead of reaching into shared state, so the whole flow can be driven by
//! a scripted surface in tests.

pub mod command;

pub use command::{Command, HELP};

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{PdfMergerError, Result};
use crate::merge::{MIN_INPUTS, MergeExecutor, MergeReport, MergeState};
use crate::output::{OutputFormatter, display_merge_report};
use crate::selection::{RowRef, SelectionList};
use crate::surface::{InteractionSurface, Notice, collect_pdf_files};
use crate::utils::with_default_extension;

/// Whether the session keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Wait for the next command.
    Continue,
    /// End the session.
    Quit,
}

/// Selection and merge state for one run of the program.
#[derive(Debug)]
pub struct Session {
    selection: SelectionList,
    executor: MergeExecutor,
    formatter: OutputFormatter,
    json: bool,
}

impl Session {
    /// Create an empty session configured by `config`.
    pub fn new(config: &Config) -> Self {
        let formatter = OutputFormatter::from_config(config);
        Self {
            selection: SelectionList::new(),
            executor: MergeExecutor::new(config.write_options(), formatter.clone()),
            formatter,
            json: config.json,
        }
    }

    /// The current selection.
    pub fn selection(&self) -> &SelectionList {
        &self.selection
    }

    /// State of the merge executor. `Idle` whenever the session is waiting
    /// for input.
    pub fn merge_state(&self) -> MergeState {
        self.executor.state()
    }

    /// Terminal state of the most recent merge.
    pub fn last_merge_outcome(&self) -> Option<MergeState> {
        self.executor.last_outcome()
    }

    /// Ask the surface for files and append them to the selection.
    ///
    /// Returns how many files were added.
    pub fn add<S>(&mut self, surface: &mut S) -> Result<usize>
    where
        S: InteractionSurface + ?Sized,
    {
        let paths = surface.pick_files()?;
        Ok(self.add_paths(paths, surface))
    }

    /// Append `paths` to the selection, in order.
    pub fn add_paths<S>(&mut self, paths: Vec<PathBuf>, surface: &mut S) -> usize
    where
        S: InteractionSurface + ?Sized,
    {
        if paths.is_empty() {
            surface.notify(Notice::info("No PDF found"));
            return 0;
        }

        let added = self.selection.add_files(paths);
        self.formatter
            .debug(&format!("added {added} file(s), {} selected", self.selection.len()));
        surface.show_selection(self.selection.entries());
        added
    }

    /// Remove the referenced rows and return how many were removed.
    pub fn remove<S>(&mut self, ids: &[RowRef], surface: &mut S) -> usize
    where
        S: InteractionSurface + ?Sized,
    {
        let removed = self.selection.remove_files(ids);
        if removed == 0 {
            surface.notify(Notice::warning("No matching rows"));
        } else {
            surface.show_selection(self.selection.entries());
        }
        removed
    }

    /// Move the row at `from` to `to`.
    pub fn move_entry<S>(&mut self, from: usize, to: usize, surface: &mut S) -> bool
    where
        S: InteractionSurface + ?Sized,
    {
        let moved = self.selection.move_entry(from, to);
        if moved {
            surface.show_selection(self.selection.entries());
        } else {
            surface.notify(Notice::warning(format!(
                "Row out of range: {} file(s) selected",
                self.selection.len()
            )));
        }
        moved
    }

    /// Clear the selection.
    pub fn reset<S>(&mut self, surface: &mut S)
    where
        S: InteractionSurface + ?Sized,
    {
        self.selection.reset();
        surface.show_selection(self.selection.entries());
    }

    /// Merge the selection.
    ///
    /// With enough inputs and no `output`, the surface is asked for a save
    /// path. Every outcome is reported through a notice and the selection is
    /// left as it was.
    ///
    /// # Errors
    ///
    /// [`PdfMergerError::Merge`] for a failed merge (already reported to the
    /// surface); any other error comes from the surface itself.
    pub fn merge<S>(&mut self, surface: &mut S, output: Option<PathBuf>) -> Result<MergeReport>
    where
        S: InteractionSurface + ?Sized,
    {
        let output = if self.selection.len() < MIN_INPUTS {
            None
        } else {
            match output {
                Some(path) => Some(path),
                None => surface.pick_save_path()?,
            }
        };

        match self.executor.merge(&self.selection, output.as_deref()) {
            Ok(report) => {
                surface.notify(Notice::success("PDFs merged successfully."));
                display_merge_report(&self.formatter, &report, self.json);
                Ok(report)
            }
            Err(err) => {
                surface.notify(Notice::error(err.to_string()));
                Err(err.into())
            }
        }
    }

    /// Run one command against the session.
    ///
    /// Merge failures are reported to the surface and do not end the
    /// session; only errors from the surface itself are returned.
    pub fn dispatch<S>(&mut self, command: Command, surface: &mut S) -> Result<Flow>
    where
        S: InteractionSurface + ?Sized,
    {
        match command {
            Command::Add(words) if words.is_empty() => {
                self.add(surface)?;
            }
            Command::Add(words) => {
                let paths = collect_pdf_files(words.as_slice(), &self.formatter);
                self.add_paths(paths, surface);
            }
            Command::Remove(rows) => {
                let ids: Vec<_> = rows.into_iter().map(RowRef::Row).collect();
                self.remove(&ids, surface);
            }
            Command::RemoveName(names) => {
                let ids: Vec<_> = names.into_iter().map(RowRef::Name).collect();
                self.remove(&ids, surface);
            }
            Command::Move { from, to } => {
                self.move_entry(from, to, surface);
            }
            Command::List => surface.show_selection(self.selection.entries()),
            Command::Merge(output) => {
                let output = output.map(with_default_extension);
                match self.merge(surface, output) {
                    Ok(_) | Err(PdfMergerError::Merge(_)) => {}
                    Err(err) => return Err(err),
                }
            }
            Command::Reset => self.reset(surface),
            Command::Help => {
                self.formatter.section("Commands");
                for (usage, text) in HELP {
                    self.formatter.info(&format!("  {usage:<22} {text}"));
                }
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}
