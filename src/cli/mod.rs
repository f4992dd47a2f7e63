//! CLI operation mode handlers.
//!
//! - [`export_thread`]: Write the thread as CSV, JSONL, or Markdown
//! - [`view`]: Print the thread as an indented tree on stdout
//!
//! Both modes share [`load_thread`], which fetches, normalises, and sorts
//! the configured thread.

use std::io;

use rethread::telemetry::{JsonlTelemetrySink, NoopTelemetrySink, TelemetryEvent, TelemetrySink};
use rethread::{
    HttpThreadGateway, LoadedThread, Normalizer, RethreadConfig, ThreadError, ThreadGateway,
    ThreadIntake, ThreadLocator, sort_tree,
};

pub mod export_thread;
pub mod view;

/// A loaded thread ready for rendering.
pub struct PreparedThread {
    /// Locator parsed from the configured URL.
    pub locator: ThreadLocator,
    /// The normalised thread, with comments in display order.
    pub thread: LoadedThread,
}

/// Selects the telemetry sink for this run.
#[must_use]
pub fn telemetry_sink(config: &RethreadConfig) -> Box<dyn TelemetrySink> {
    if config.telemetry {
        Box::new(JsonlTelemetrySink::new(io::stderr()))
    } else {
        Box::new(NoopTelemetrySink)
    }
}

/// Fetches the configured thread over HTTP and prepares it for rendering.
///
/// # Errors
///
/// Returns an error if the URL is missing or invalid, the sort settings are
/// unsupported, or the fetch or normalisation fails.
pub fn load_thread(
    config: &RethreadConfig,
    telemetry: &dyn TelemetrySink,
) -> Result<PreparedThread, ThreadError> {
    let gateway = HttpThreadGateway::new(&config.gateway_config())?;
    prepare_thread(config, &gateway, telemetry)
}

/// Loads the configured thread through `gateway`, then applies sorting.
fn prepare_thread<G: ThreadGateway>(
    config: &RethreadConfig,
    gateway: &G,
    telemetry: &dyn TelemetrySink,
) -> Result<PreparedThread, ThreadError> {
    let locator = ThreadLocator::parse(config.require_thread_url()?)?;
    let sort = config.sort_spec()?;

    let intake = ThreadIntake::new(gateway, Normalizer::new(config.max_depth));
    let mut thread = intake.load(&locator)?;
    telemetry.record(TelemetryEvent::ThreadNormalised {
        comments: thread.comment_count(),
        truncated_subtrees: thread.truncated_subtrees,
    });

    if let Some(spec) = sort {
        thread.comments = sort_tree(&thread.comments, spec);
    }

    Ok(PreparedThread { locator, thread })
}
