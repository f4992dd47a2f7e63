//! Markdown formatter for flattened comment rows.
//!
//! Renders the thread as a nested bullet outline: each comment becomes one
//! bullet, indented two spaces per level of depth.

use std::io::Write;

use crate::thread::ThreadError;

use super::flatten::ExportRow;
use super::model::ThreadHeading;

/// Writes rows as a Markdown outline to the given writer.
///
/// The output starts with a header naming the thread, followed by one bullet
/// per row carrying author, score, publication time, and body.
///
/// # Errors
///
/// Returns [`ThreadError::Io`] if writing to the output fails.
pub fn write_markdown<W: Write>(
    writer: &mut W,
    rows: &[ExportRow],
    heading: ThreadHeading<'_>,
) -> Result<(), ThreadError> {
    write_header(writer, heading, rows.len())?;

    for row in rows {
        write_row(writer, row)?;
    }

    Ok(())
}

fn write_header<W: Write>(
    writer: &mut W,
    heading: ThreadHeading<'_>,
    count: usize,
) -> Result<(), ThreadError> {
    writeln!(writer, "# Thread Export").map_err(|e| ThreadError::io(&e))?;
    writeln!(writer).map_err(|e| ThreadError::io(&e))?;
    if let Some(title) = heading.title() {
        writeln!(writer, "**Title:** {title}").map_err(|e| ThreadError::io(&e))?;
    }
    writeln!(writer, "Thread: {}", heading.url).map_err(|e| ThreadError::io(&e))?;
    writeln!(writer, "Comments: {count}").map_err(|e| ThreadError::io(&e))?;
    writeln!(writer).map_err(|e| ThreadError::io(&e))?;
    Ok(())
}

fn write_row<W: Write>(writer: &mut W, row: &ExportRow) -> Result<(), ThreadError> {
    let indent = "  ".repeat(row.depth);
    let points = if row.score.abs() == 1 { "point" } else { "points" };
    writeln!(
        writer,
        "{indent}- **{}** ({} {points}, {}): {}",
        row.author, row.score, row.published, row.body
    )
    .map_err(|e| ThreadError::io(&e))
}
