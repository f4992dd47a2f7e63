//! Shared test utilities for ordering and export tests.
//!
//! This module provides a fluent builder for canonical comment trees and
//! small assertion helpers used across the export test modules.

use crate::thread::CommentNode;

/// Builder for creating test [`CommentNode`] instances with a fluent API.
#[must_use]
pub struct NodeBuilder {
    id: String,
    author: String,
    body: String,
    score: i64,
    created_utc: i64,
    replies: Vec<CommentNode>,
}

impl NodeBuilder {
    /// Creates a builder with the given id and neutral defaults.
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            author: format!("author-{id}"),
            body: format!("body of {id}"),
            score: 0,
            created_utc: 0,
            replies: Vec::new(),
        }
    }

    /// Sets the author.
    pub fn author(mut self, author: &str) -> Self {
        self.author = author.to_owned();
        self
    }

    /// Sets the body.
    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_owned();
        self
    }

    /// Sets the score.
    pub const fn score(mut self, score: i64) -> Self {
        self.score = score;
        self
    }

    /// Sets the creation time.
    pub const fn created_utc(mut self, created_utc: i64) -> Self {
        self.created_utc = created_utc;
        self
    }

    /// Appends a reply.
    pub fn reply(mut self, reply: CommentNode) -> Self {
        self.replies.push(reply);
        self
    }

    /// Builds the [`CommentNode`].
    #[must_use]
    pub fn build(self) -> CommentNode {
        CommentNode {
            id: self.id,
            author: self.author,
            body: self.body,
            score: self.score,
            created_utc: self.created_utc,
            replies: self.replies,
        }
    }
}

/// Returns the ids of a sibling list in order.
#[must_use]
pub fn sibling_ids(nodes: &[CommentNode]) -> Vec<&str> {
    nodes.iter().map(|node| node.id.as_str()).collect()
}

/// Asserts that `haystack` contains `needle`, returning an error if not.
///
/// # Errors
///
/// Returns a description of the mismatch when `needle` is absent.
pub fn assert_contains(haystack: &str, needle: &str) -> Result<(), String> {
    if haystack.contains(needle) {
        Ok(())
    } else {
        Err(format!(
            "expected output to contain '{needle}', got:\n{haystack}"
        ))
    }
}
