//! User-facing output for pdfmerger.
//!
//! Everything the program prints goes through [`OutputFormatter`]: status
//! lines, notices raised by the session, verbose per-file details and the
//! optional JSON merge report.

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

use crate::merge::MergeReport;
use crate::utils::format_file_size;

/// Display a merge report, as JSON when `json` is set.
pub fn display_merge_report(formatter: &OutputFormatter, report: &MergeReport, json: bool) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(text) => println!("{text}"),
            Err(err) => formatter.warning(&format!("Could not encode report: {err}")),
        }
        return;
    }

    formatter.info(&format!(
        "Merged {} file(s): {} pages, {}",
        report.inputs.len(),
        report.total_pages,
        format_file_size(report.file_size)
    ));
}
