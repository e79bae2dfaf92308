//! Merge execution.
//!
//! The executor takes the current selection, loads every document in list
//! order through `lopdf`, concatenates their page trees and writes the result
//! to the chosen output path.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerger::merge::MergeExecutor;
//! use pdfmerger::selection::SelectionList;
//! use std::path::Path;
//!
//! let mut list = SelectionList::new();
//! list.add_files(["/docs/a.pdf", "/docs/b.pdf"]);
//!
//! let mut executor = MergeExecutor::default();
//! match executor.merge(&list, Some(Path::new("/docs/merged.pdf"))) {
//!     Ok(report) => println!("{} pages written", report.total_pages),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

pub mod merger;

pub use merger::{MIN_INPUTS, MergeExecutor, MergeReport, MergeState};
