//! Stable, recursive ordering of comment trees.
//!
//! Every sibling list, at every depth, is ordered by the same key and
//! direction. Comments with equal keys keep their relative input order in
//! both directions.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::thread::{CommentNode, ThreadError};

/// Field used to order siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Creation time (`created_utc`).
    Time,
    /// Net score.
    Score,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest key first.
    Ascending,
    /// Largest key first.
    #[default]
    Descending,
}

/// Key and direction applied by [`sort_tree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    /// Field to compare.
    pub key: SortKey,
    /// Direction of the comparison.
    pub order: SortOrder,
}

impl SortSpec {
    /// Creates a sort specification.
    #[must_use]
    pub const fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    /// Compares two comments under this specification.
    #[must_use]
    pub fn compare(self, a: &CommentNode, b: &CommentNode) -> Ordering {
        let ordering = match self.key {
            SortKey::Time => a.created_utc.cmp(&b.created_utc),
            SortKey::Score => a.score.cmp(&b.score),
        };
        match self.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Returns a copy of `nodes` with every sibling list ordered by `spec`.
///
/// The input is left untouched and parent/child membership is preserved.
/// Sorting relies on the stable `sort_by`, so ties keep source order and the
/// operation is idempotent.
#[must_use]
pub fn sort_tree(nodes: &[CommentNode], spec: SortSpec) -> Vec<CommentNode> {
    let mut sorted = nodes.to_vec();
    let mut pending: Vec<&mut Vec<CommentNode>> = vec![&mut sorted];
    while let Some(level) = pending.pop() {
        level.sort_by(|a, b| spec.compare(a, b));
        pending.extend(level.into_iter().map(|node| &mut node.replies));
    }
    sorted
}

impl FromStr for SortKey {
    type Err = ThreadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "time" | "date" | "created" => Ok(Self::Time),
            "score" | "points" => Ok(Self::Score),
            _ => Err(ThreadError::Configuration {
                message: format!("unsupported sort key '{s}': valid options are 'time' or 'score'"),
            }),
        }
    }
}

impl FromStr for SortOrder {
    type Err = ThreadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ascending" | "asc" => Ok(Self::Ascending),
            "descending" | "desc" => Ok(Self::Descending),
            _ => Err(ThreadError::Configuration {
                message: format!(
                    "unsupported sort order '{s}': valid options are 'ascending' or 'descending'"
                ),
            }),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Time => write!(f, "time"),
            Self::Score => write!(f, "score"),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "ascending"),
            Self::Descending => write!(f, "descending"),
        }
    }
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod tests;
