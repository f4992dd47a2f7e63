//! Sorting, flattening, and structured export of comment trees.
//!
//! A normalised tree is re-ordered with [`sort_tree`] for display and
//! flattened with [`flatten`] into depth-annotated [`ExportRow`] values,
//! which the writers serialise.
//!
//! # Supported Formats
//!
//! - **CSV**: Spreadsheet table with the columns `level`, `comment id`,
//!   `author`, `content`, `score`, `published time`, `timestamp`
//! - **JSONL**: One JSON object per row
//! - **Markdown**: Indented bullet outline
//!
//! # Ordering
//!
//! Sorting is stable and applies the same key and direction at every depth.
//! Without a sort, rows follow source order.

mod csv;
mod flatten;
mod jsonl;
mod markdown;
mod model;
mod ordering;
#[cfg(any(test, feature = "test-support"))]
#[doc(hidden)]
pub mod test_helpers;

pub use csv::{CSV_HEADER, write_csv};
pub use flatten::{ExportRow, TimestampZone, flatten, flatten_at};
pub use jsonl::write_jsonl;
pub use markdown::write_markdown;
pub use model::{ExportFormat, ThreadHeading};
pub use ordering::{SortKey, SortOrder, SortSpec, sort_tree};

use std::io::Write;

use crate::thread::ThreadError;

/// Writes rows in the requested format.
///
/// # Errors
///
/// Returns [`ThreadError::Io`] if writing to the output fails.
pub fn write_rows<W: Write>(
    writer: &mut W,
    rows: &[ExportRow],
    format: ExportFormat,
    heading: ThreadHeading<'_>,
) -> Result<(), ThreadError> {
    match format {
        ExportFormat::Csv => write_csv(writer, rows),
        ExportFormat::Jsonl => write_jsonl(writer, rows),
        ExportFormat::Markdown => write_markdown(writer, rows, heading),
    }
}
