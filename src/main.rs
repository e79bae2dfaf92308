//! pdfmerger - pick, order and merge PDF files into a single document.

use std::process;

fn main() {
    if let Err(err) = pdfmerger::run() {
        eprintln!("Error: {err}");
        process::exit(err.exit_code());
    }
}
