//! Ordered list of files chosen for the next merge.
//!
//! Insertion order is merge order. The list never checks that a path exists
//! or is a PDF; bad inputs only surface when the merge runs.
//!
//! # Examples
//!
//! ```
//! use pdfmerger::selection::{RowRef, SelectionList};
//!
//! let mut list = SelectionList::new();
//! list.add_files(["/a/intro.pdf", "/b/report.pdf", "/c/report.pdf"]);
//!
//! // Positional removal drops exactly one row.
//! assert_eq!(list.remove_files(&[RowRef::Row(1)]), 1);
//! assert_eq!(list.len(), 2);
//!
//! // Name removal drops every entry with that display name.
//! assert_eq!(list.remove_files(&[RowRef::name("intro.pdf")]), 1);
//! assert_eq!(list.len(), 1);
//! ```

use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// A single selected input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedFile {
    /// Path as handed to the list.
    pub path: PathBuf,
    /// Last path segment, shown in place of the full path.
    pub display_name: String,
}

impl SelectedFile {
    /// Create an entry, deriving its display name from the path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display_name = display_name(&path);
        Self { path, display_name }
    }
}

impl fmt::Display for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name)
    }
}

/// Derive the display name of a path: everything after the last separator,
/// or the whole path when it has none.
pub fn display_name(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let cut = raw
        .rfind(|c: char| std::path::is_separator(c))
        .map_or(0, |idx| idx + 1);
    raw[cut..].to_owned()
}

/// Identifies entries to remove.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowRef {
    /// Zero-based position of a single row.
    Row(usize),
    /// Every entry whose display name matches.
    Name(String),
}

impl RowRef {
    /// Shorthand for [`RowRef::Name`].
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

/// Ordered sequence of selected files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionList {
    entries: Vec<SelectedFile>,
}

impl SelectionList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry per path, in input order.
    ///
    /// Returns the number of entries added. Duplicates are kept.
    pub fn add_files<I>(&mut self, paths: I) -> usize
    where
        I: IntoIterator,
        I::Item: Into<PathBuf>,
    {
        let before = self.entries.len();
        self.entries.extend(paths.into_iter().map(SelectedFile::new));
        self.entries.len() - before
    }

    /// Remove the referenced entries and return how many were removed.
    ///
    /// Rows address positions as they were before the call, so removing
    /// `Row(0)` and `Row(1)` together drops the first two entries. Rows out of
    /// range are ignored.
    pub fn remove_files(&mut self, ids: &[RowRef]) -> usize {
        let mut rows = HashSet::new();
        let mut names = HashSet::new();
        for id in ids {
            match id {
                RowRef::Row(row) => {
                    rows.insert(*row);
                }
                RowRef::Name(name) => {
                    names.insert(name.as_str());
                }
            }
        }

        let before = self.entries.len();
        let mut row = 0;
        self.entries.retain(|entry| {
            let keep = !rows.contains(&row) && !names.contains(entry.display_name.as_str());
            row += 1;
            keep
        });
        before - self.entries.len()
    }

    /// Move the entry at `from` so that it ends up at `to`.
    ///
    /// Returns `false` and leaves the list untouched when either index is out
    /// of range.
    pub fn move_entry(&mut self, from: usize, to: usize) -> bool {
        if from >= self.entries.len() || to >= self.entries.len() {
            return false;
        }
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        true
    }

    /// Drop every entry.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in merge order.
    pub fn entries(&self) -> &[SelectedFile] {
        &self.entries
    }

    /// Iterate over entries in merge order.
    pub fn iter(&self) -> std::slice::Iter<'_, SelectedFile> {
        self.entries.iter()
    }

    /// Paths in merge order.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.entries.iter().map(|e| e.path.clone()).collect()
    }
}

impl<'a> IntoIterator for &'a SelectionList {
    type Item = &'a SelectedFile;
    type IntoIter = std::slice::Iter<'a, SelectedFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
