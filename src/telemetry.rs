//! Run summaries emitted as structured events.
//!
//! A run reports how much of the fetched thread survived normalisation and
//! how many rows reached the output. Events are opt-in (`telemetry = true`)
//! and are written as one JSON object per line, so they can be piped into
//! `jq` next to the regular log output.

use std::io::Write;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

/// Outcome of one stage of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// The fetched thread was reduced to its canonical tree.
    ThreadNormalised {
        /// Comments left in the canonical tree.
        comments: usize,
        /// Live subtrees dropped at the depth ceiling.
        truncated_subtrees: usize,
    },
    /// Rows were written in an export format.
    ThreadExported {
        /// Lower-case format name, as accepted by `export`.
        format: String,
        /// Rows written, one per comment.
        rows: usize,
    },
}

/// Destination for [`TelemetryEvent`]s.
pub trait TelemetrySink: Send + Sync {
    /// Accepts one event. Sinks never fail the run.
    fn record(&self, event: TelemetryEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Writes each event as a JSON line to the wrapped writer.
#[derive(Debug)]
pub struct JsonlTelemetrySink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonlTelemetrySink<W> {
    /// Wraps `writer`; events are flushed as they are recorded.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Returns the wrapped writer, or `None` if its lock was poisoned.
    #[must_use]
    pub fn into_inner(self) -> Option<W> {
        self.writer.into_inner().ok()
    }
}

impl<W: Write + Send> TelemetrySink for JsonlTelemetrySink<W> {
    fn record(&self, event: TelemetryEvent) {
        let Ok(line) = serde_json::to_string(&event) else {
            return;
        };
        let Ok(mut writer) = self.writer.lock() else {
            return;
        };
        if let Err(error) = writeln!(writer, "{line}").and_then(|()| writer.flush()) {
            tracing::debug!(%error, "telemetry event dropped");
        }
    }
}
