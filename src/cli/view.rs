//! Plain-text tree view printed when no export format is configured.

use std::io::{self, Write};

use rethread::export::{ExportRow, ThreadHeading};
use rethread::{RethreadConfig, ThreadError, flatten};

use super::{load_thread, telemetry_sink};

/// Prints the configured thread as an indented tree on stdout.
///
/// # Errors
///
/// Returns an error if loading the thread or writing to stdout fails.
pub fn run(config: &RethreadConfig) -> Result<(), ThreadError> {
    let telemetry = telemetry_sink(config);
    let prepared = load_thread(config, telemetry.as_ref())?;
    let rows = flatten(&prepared.thread.comments, config.timestamp_zone());
    let heading = ThreadHeading::new(prepared.locator.source(), prepared.thread.summary.as_ref());

    let stdout = io::stdout();
    let mut writer = stdout.lock();
    write_tree(&mut writer, &rows, heading)
}

/// Writes one block per comment, indented four spaces per depth level.
fn write_tree<W: Write>(
    writer: &mut W,
    rows: &[ExportRow],
    heading: ThreadHeading<'_>,
) -> Result<(), ThreadError> {
    let title = heading.title().unwrap_or(heading.url);
    writeln!(writer, "{title} ({} comments)", rows.len()).map_err(|e| ThreadError::io(&e))?;

    for row in rows {
        let indent = "    ".repeat(row.depth);
        writeln!(
            writer,
            "{indent}[{}] {} at {}",
            row.score, row.author, row.published
        )
        .map_err(|e| ThreadError::io(&e))?;
        writeln!(writer, "{indent}  {}", row.body).map_err(|e| ThreadError::io(&e))?;
    }
    Ok(())
}
