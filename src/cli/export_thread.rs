//! Thread export operation for structured output.
//!
//! Writes the flattened thread as CSV, JSONL, or Markdown to the configured
//! output file, or to stdout when none is set.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use camino::Utf8Path;

use rethread::export::{ExportFormat, ExportRow, ThreadHeading, write_rows};
use rethread::telemetry::TelemetryEvent;
use rethread::{RethreadConfig, ThreadError, flatten};

use super::{load_thread, telemetry_sink};

/// Exports the configured thread in `format`.
///
/// # Errors
///
/// Returns an error if:
/// - The thread URL is missing or invalid
/// - The sort settings are unsupported
/// - The HTTP fetch or normalisation fails
/// - Writing to the output fails
pub fn run(config: &RethreadConfig, format: ExportFormat) -> Result<(), ThreadError> {
    let telemetry = telemetry_sink(config);
    let prepared = load_thread(config, telemetry.as_ref())?;

    let rows = flatten(&prepared.thread.comments, config.timestamp_zone());
    let heading = ThreadHeading::new(prepared.locator.source(), prepared.thread.summary.as_ref());
    write_output(config.output.as_deref().map(Utf8Path::new), &rows, format, heading)?;

    tracing::info!(rows = rows.len(), %format, "thread exported");
    telemetry.record(TelemetryEvent::ThreadExported {
        format: format.to_string(),
        rows: rows.len(),
    });
    Ok(())
}

/// Writes rows to `output`, or to stdout when no path is given.
fn write_output(
    output: Option<&Utf8Path>,
    rows: &[ExportRow],
    format: ExportFormat,
    heading: ThreadHeading<'_>,
) -> Result<(), ThreadError> {
    if let Some(path) = output {
        let file = File::create(path).map_err(|e| ThreadError::Io {
            message: format!("failed to create output file '{path}': {e}"),
        })?;
        let mut writer = BufWriter::new(file);
        write_rows(&mut writer, rows, format, heading)?;
        writer.flush().map_err(|e| ThreadError::Io {
            message: format!("failed to flush output file: {e}"),
        })
    } else {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        write_rows(&mut writer, rows, format, heading)
    }
}
