//! Rethread library crate for exporting discussion threads.
//!
//! The library parses thread URLs, fetches the upstream comment listing,
//! normalises it into a canonical comment tree, and renders that tree as
//! sorted, depth-annotated rows in CSV, JSONL, or Markdown.

pub mod config;
pub mod export;
pub mod telemetry;
pub mod thread;

pub use config::RethreadConfig;
pub use export::{ExportFormat, ExportRow, SortKey, SortOrder, SortSpec, flatten, sort_tree};
pub use thread::{
    CommentNode, HttpGatewayConfig, HttpThreadGateway, LoadedThread, Normalizer, ThreadError,
    ThreadGateway, ThreadIntake, ThreadLocator, normalize,
};
