//! CSV formatter for flattened comment rows.
//!
//! Produces a spreadsheet-compatible table with one header row followed by
//! one record per comment. Fields are quoted only when they contain a comma,
//! a double quote, or a line break; embedded quotes are doubled.

use std::io::Write;

use crate::thread::ThreadError;

use super::flatten::ExportRow;

/// Column labels, in [`ExportRow`] field order.
pub const CSV_HEADER: [&str; 7] = [
    "level",
    "comment id",
    "author",
    "content",
    "score",
    "published time",
    "timestamp",
];

/// Writes rows as CSV to the given writer.
///
/// # Errors
///
/// Returns [`ThreadError::Io`] if writing to the output fails.
pub fn write_csv<W: Write>(writer: &mut W, rows: &[ExportRow]) -> Result<(), ThreadError> {
    write_record(writer, CSV_HEADER)?;

    for row in rows {
        write_record(
            writer,
            [
                row.depth.to_string().as_str(),
                row.id.as_str(),
                row.author.as_str(),
                row.body.as_str(),
                row.score.to_string().as_str(),
                row.published.as_str(),
                row.timestamp.to_string().as_str(),
            ],
        )?;
    }

    Ok(())
}

fn write_record<W: Write>(writer: &mut W, fields: [&str; 7]) -> Result<(), ThreadError> {
    let line = fields.map(escape_field).join(",");
    writer
        .write_all(line.as_bytes())
        .and_then(|()| writer.write_all(b"\r\n"))
        .map_err(|error| ThreadError::io(&error))
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}
