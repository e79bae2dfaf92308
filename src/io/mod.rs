//! PDF input and output.
//!
//! [`PdfReader`] loads and classifies input documents, [`PdfWriter`]
//! serialises the merged result.

pub mod reader;
pub mod writer;

pub use reader::{LoadedPdf, PdfReader};
pub use writer::{PdfWriter, WriteOptions, WriteStatistics};
