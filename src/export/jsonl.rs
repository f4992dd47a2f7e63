//! JSONL (JSON Lines) formatter for flattened comment rows.
//!
//! Generates machine-readable output with one JSON object per line,
//! suitable for processing by other automated pipelines.

use std::io::Write;

use crate::thread::ThreadError;

use super::flatten::ExportRow;

/// Writes rows in JSONL format to the given writer.
///
/// Each row is serialised as a single JSON object on its own line.
///
/// # Errors
///
/// Returns [`ThreadError::Io`] if writing to the output fails, or if
/// JSON serialisation fails.
pub fn write_jsonl<W: Write>(writer: &mut W, rows: &[ExportRow]) -> Result<(), ThreadError> {
    for row in rows {
        serde_json::to_writer(&mut *writer, row).map_err(|e| ThreadError::Io {
            message: format!("JSON serialisation failed: {e}"),
        })?;
        writeln!(writer).map_err(|e| ThreadError::io(&e))?;
    }
    Ok(())
}
