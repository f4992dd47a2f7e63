//! Discussion thread intake and normalisation.
//!
//! This module parses thread URLs, fetches the upstream JSON payload, and
//! converts its heterogeneous listing entries into a canonical comment tree.
//! Deleted comments and non-comment entries never reach the canonical tree.

pub mod error;
pub mod gateway;
pub mod intake;
pub mod locator;
pub mod model;
pub mod normalize;
pub mod raw;

pub use error::ThreadError;
pub use gateway::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, HttpGatewayConfig, HttpThreadGateway, ThreadGateway,
};
pub use intake::{LoadedThread, ThreadIntake};
pub use locator::{ThreadId, ThreadLocator};
pub use model::{CommentNode, ThreadPayload, ThreadSummary, node_count};
pub use normalize::{DEFAULT_MAX_DEPTH, NormalizedThread, Normalizer, normalize};
pub use raw::{
    COMMENT_KIND, DELETED_BODY, RawCommentData, RawListing, RawListingData, RawNode,
    decode_listings,
};

#[cfg(test)]
pub use gateway::MockThreadGateway;
