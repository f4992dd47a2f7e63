//! Conversion of raw listing entries into the canonical comment tree.
//!
//! Entries that are not comments, or whose body is the deleted placeholder,
//! are dropped together with everything beneath them. Kept entries are copied
//! verbatim. Descent stops at a configurable depth so pathological payloads
//! degrade into truncated subtrees instead of exhausting the stack.

use super::error::ThreadError;
use super::model::CommentNode;
use super::raw::RawNode;

/// Depth ceiling applied by [`normalize`] and [`Normalizer::default`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

const UNKNOWN_ID: &str = "<unknown>";

/// Result of normalising a thread.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedThread {
    /// Canonical top-level comments in source order.
    pub comments: Vec<CommentNode>,
    /// Number of kept comments whose live replies were cut at the depth
    /// ceiling.
    pub truncated_subtrees: usize,
}

/// Normaliser with a depth ceiling.
///
/// Top-level comments sit at depth 0. A comment at `max_depth` is kept with
/// empty replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    max_depth: usize,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl Normalizer {
    /// Creates a normaliser that stops descending below `max_depth`.
    #[must_use]
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Returns the configured depth ceiling.
    #[must_use]
    pub const fn max_depth(self) -> usize {
        self.max_depth
    }

    /// Normalises one sibling level of raw entries and everything below it.
    ///
    /// # Errors
    ///
    /// Returns [`ThreadError::InvalidInput`] when a kept comment lacks its
    /// id, author, body, score, or creation time.
    pub fn normalize(self, raw: &[RawNode]) -> Result<NormalizedThread, ThreadError> {
        let mut truncated_subtrees = 0;
        let comments = self.normalize_level(raw, 0, &mut truncated_subtrees)?;

        if truncated_subtrees > 0 {
            tracing::warn!(
                truncated_subtrees,
                max_depth = self.max_depth,
                "comment tree exceeded the depth ceiling; deeper replies were dropped"
            );
        }

        Ok(NormalizedThread {
            comments,
            truncated_subtrees,
        })
    }

    fn normalize_level(
        self,
        raw: &[RawNode],
        depth: usize,
        truncated: &mut usize,
    ) -> Result<Vec<CommentNode>, ThreadError> {
        raw.iter()
            .filter(|node| node.is_live_comment())
            .map(|node| self.normalize_node(node, depth, truncated))
            .collect()
    }

    fn normalize_node(
        self,
        node: &RawNode,
        depth: usize,
        truncated: &mut usize,
    ) -> Result<CommentNode, ThreadError> {
        let data = &node.data;
        let id = data.id.clone().ok_or_else(|| missing(UNKNOWN_ID, "id"))?;
        let author = data.author.clone().ok_or_else(|| missing(&id, "author"))?;
        let body = data.body.clone().ok_or_else(|| missing(&id, "body"))?;
        let score = data.score.ok_or_else(|| missing(&id, "score"))?;
        let created_utc = data.created_utc.ok_or_else(|| missing(&id, "created_utc"))?;

        let children = node.reply_nodes();
        let replies = if depth < self.max_depth {
            self.normalize_level(children, depth + 1, truncated)?
        } else {
            if children.iter().any(RawNode::is_live_comment) {
                *truncated += 1;
            }
            Vec::new()
        };

        Ok(CommentNode {
            id,
            author,
            body,
            score,
            created_utc,
            replies,
        })
    }
}

fn missing(id: &str, field: &'static str) -> ThreadError {
    ThreadError::InvalidInput {
        id: id.to_owned(),
        field,
    }
}

/// Normalises raw entries with the default depth ceiling.
///
/// # Errors
///
/// Returns [`ThreadError::InvalidInput`] when a kept comment lacks a
/// required field.
pub fn normalize(raw: &[RawNode]) -> Result<Vec<CommentNode>, ThreadError> {
    Normalizer::default()
        .normalize(raw)
        .map(|thread| thread.comments)
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
