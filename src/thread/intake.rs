//! Facade that fetches a thread and normalises it in one step.

use super::error::ThreadError;
use super::gateway::ThreadGateway;
use super::locator::ThreadLocator;
use super::model::{CommentNode, ThreadSummary, node_count};
use super::normalize::Normalizer;

/// A fetched thread reduced to its canonical comment tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedThread {
    /// Submission metadata when the upstream payload carried it.
    pub summary: Option<ThreadSummary>,
    /// Canonical top-level comments in source order.
    pub comments: Vec<CommentNode>,
    /// Number of subtrees cut at the depth ceiling.
    pub truncated_subtrees: usize,
}

impl LoadedThread {
    /// Total number of comments in the tree, replies included.
    #[must_use]
    pub fn comment_count(&self) -> usize {
        node_count(&self.comments)
    }
}

/// Loads threads through a gateway.
pub struct ThreadIntake<'client, Gateway>
where
    Gateway: ThreadGateway,
{
    client: &'client Gateway,
    normalizer: Normalizer,
}

impl<'client, Gateway> ThreadIntake<'client, Gateway>
where
    Gateway: ThreadGateway,
{
    /// Create a new intake facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway, normalizer: Normalizer) -> Self {
        Self { client, normalizer }
    }

    /// Fetch the thread behind `locator` and normalise its comments.
    ///
    /// # Errors
    ///
    /// Propagates gateway failures and returns [`ThreadError::InvalidInput`]
    /// when a kept comment is missing a required field.
    pub fn load(&self, locator: &ThreadLocator) -> Result<LoadedThread, ThreadError> {
        let payload = self.client.fetch_thread(locator)?;
        let normalized = self.normalizer.normalize(&payload.comments)?;

        let loaded = LoadedThread {
            summary: payload.summary,
            comments: normalized.comments,
            truncated_subtrees: normalized.truncated_subtrees,
        };
        tracing::info!(
            thread = locator.thread_id().as_str(),
            comments = loaded.comment_count(),
            "thread normalised"
        );
        Ok(loaded)
    }
}
