//! Canonical comment tree and thread summary types.

use serde::Serialize;

use super::raw::RawNode;

/// A normalised comment with its replies.
///
/// Produced by [`crate::thread::normalize`]; never holds a deleted body or a
/// non-comment entry. `replies` is always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentNode {
    /// Comment identifier, unique among its siblings.
    pub id: String,
    /// Author name.
    pub author: String,
    /// Comment body as published.
    pub body: String,
    /// Net score; may be negative.
    pub score: i64,
    /// Creation time in Unix seconds.
    pub created_utc: i64,
    /// Direct replies, in source order until sorted.
    pub replies: Vec<CommentNode>,
}

/// Counts every node in a forest, replies included.
#[must_use]
pub fn node_count(nodes: &[CommentNode]) -> usize {
    let mut total = 0;
    let mut pending: Vec<&[CommentNode]> = vec![nodes];
    while let Some(level) = pending.pop() {
        total += level.len();
        pending.extend(level.iter().map(|node| node.replies.as_slice()));
    }
    total
}

/// Submission metadata accompanying a fetched thread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadSummary {
    /// Submission identifier.
    pub id: Option<String>,
    /// Submission title.
    pub title: Option<String>,
    /// Submission author.
    pub author: Option<String>,
    /// Community the thread belongs to.
    pub subreddit: Option<String>,
}

impl From<&RawNode> for ThreadSummary {
    fn from(value: &RawNode) -> Self {
        Self {
            id: value.data.id.clone(),
            title: value.data.title.clone(),
            author: value.data.author.clone(),
            subreddit: value.data.subreddit.clone(),
        }
    }
}

/// Thread payload split into its submission and top-level comment entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThreadPayload {
    /// Submission metadata when the post listing carried one.
    pub summary: Option<ThreadSummary>,
    /// Top-level raw comment entries in source order.
    pub comments: Vec<RawNode>,
}
