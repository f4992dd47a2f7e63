//! Pre-order flattening of comment trees into export rows.

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::thread::CommentNode;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Time zone used to render the `published` column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimestampZone {
    /// The machine's local time zone.
    #[default]
    Local,
    /// Coordinated Universal Time.
    Utc,
}

impl TimestampZone {
    /// Formats Unix seconds as `YYYY-MM-DD HH:MM:SS` in this zone.
    ///
    /// Values outside the representable calendar range fall back to the
    /// decimal number of seconds.
    #[must_use]
    pub fn format(self, seconds: i64) -> String {
        let Some(instant) = DateTime::<Utc>::from_timestamp(seconds, 0) else {
            return seconds.to_string();
        };
        match self {
            Self::Local => instant
                .with_timezone(&Local)
                .format(TIMESTAMP_FORMAT)
                .to_string(),
            Self::Utc => instant.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

/// A single-line record describing one comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRow {
    /// Distance from the roots passed to [`flatten_at`] plus its base depth.
    pub depth: usize,
    /// Comment identifier.
    pub id: String,
    /// Author name.
    pub author: String,
    /// Body with every newline replaced by a space.
    pub body: String,
    /// Net score.
    pub score: i64,
    /// Formatted creation time.
    pub published: String,
    /// Creation time in Unix seconds.
    pub timestamp: i64,
}

impl ExportRow {
    fn from_node(node: &CommentNode, depth: usize, zone: TimestampZone) -> Self {
        Self {
            depth,
            id: node.id.clone(),
            author: node.author.clone(),
            body: node.body.replace('\n', " "),
            score: node.score,
            published: zone.format(node.created_utc),
            timestamp: node.created_utc,
        }
    }
}

/// Flattens a forest into rows, starting at depth 0.
#[must_use]
pub fn flatten(nodes: &[CommentNode], zone: TimestampZone) -> Vec<ExportRow> {
    flatten_at(nodes, 0, zone)
}

/// Flattens a forest into rows in pre-order, starting at `depth`.
///
/// Each comment is emitted before its replies, and a reply subtree is
/// exhausted before the next sibling.
#[must_use]
pub fn flatten_at(nodes: &[CommentNode], depth: usize, zone: TimestampZone) -> Vec<ExportRow> {
    let mut rows = Vec::new();
    let mut pending: Vec<(usize, &CommentNode)> =
        nodes.iter().rev().map(|node| (depth, node)).collect();

    while let Some((level, node)) = pending.pop() {
        rows.push(ExportRow::from_node(node, level, zone));
        pending.extend(node.replies.iter().rev().map(|reply| (level.saturating_add(1), reply)));
    }

    rows
}
