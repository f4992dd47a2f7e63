//! Gateway for fetching a thread's raw comment payload over HTTP.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use super::error::ThreadError;
use super::locator::ThreadLocator;
use super::model::{ThreadPayload, ThreadSummary};
use super::raw::{POST_KIND, RawListing, decode_listings};

/// Default `User-Agent` sent with thread requests.
pub const DEFAULT_USER_AGENT: &str = concat!("rethread/", env!("CARGO_PKG_VERSION"));

/// Default HTTP timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

const ERROR_BODY_LIMIT: usize = 160;

/// Loads the raw payload for a thread.
#[cfg_attr(test, mockall::automock)]
pub trait ThreadGateway {
    /// Fetches the thread identified by `locator`.
    ///
    /// # Errors
    ///
    /// Returns a [`ThreadError`] when the request or decoding fails.
    fn fetch_thread(&self, locator: &ThreadLocator) -> Result<ThreadPayload, ThreadError>;
}

/// Configuration for [`HttpThreadGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpGatewayConfig {
    /// `User-Agent` header value.
    pub user_agent: String,
    /// HTTP timeout.
    pub timeout: Duration,
}

impl Default for HttpGatewayConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Blocking HTTP implementation of [`ThreadGateway`].
#[derive(Debug, Clone)]
pub struct HttpThreadGateway {
    client: Client,
}

impl HttpThreadGateway {
    /// Creates a gateway from explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ThreadError::Configuration`] when the HTTP client cannot be
    /// built.
    pub fn new(config: &HttpGatewayConfig) -> Result<Self, ThreadError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|error| ThreadError::Configuration {
                message: format!("failed to configure HTTP client: {error}"),
            })?;
        Ok(Self { client })
    }
}

impl ThreadGateway for HttpThreadGateway {
    fn fetch_thread(&self, locator: &ThreadLocator) -> Result<ThreadPayload, ThreadError> {
        let endpoint = locator.json_url();
        tracing::debug!(%endpoint, "fetching thread");

        let response = self
            .client
            .get(endpoint.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|error| ThreadError::Network {
                message: format!("thread request transport failed: {error}"),
            })?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            let body = response.text().map_or_else(
                |_| "(failed to read error response body)".to_owned(),
                |content| truncate_for_message(content.as_str(), ERROR_BODY_LIMIT),
            );
            return Err(ThreadError::Api {
                message: format!("thread request failed with status {}: {body}", status.as_u16()),
            });
        }

        let body = response.bytes().map_err(|error| ThreadError::Network {
            message: format!("thread response body could not be read: {error}"),
        })?;
        let listings = decode_listings(&body).map_err(|error| ThreadError::Api {
            message: format!("thread response JSON decoding failed: {error}"),
        })?;
        let payload = ThreadPayload::from_listings(listings)?;

        tracing::info!(
            thread = locator.thread_id().as_str(),
            top_level_entries = payload.comments.len(),
            "fetched thread"
        );
        Ok(payload)
    }
}

impl ThreadPayload {
    /// Splits the API's `[post listing, comment listing]` array.
    ///
    /// # Errors
    ///
    /// Returns [`ThreadError::Api`] when the comment listing is missing.
    pub fn from_listings(listings: Vec<RawListing>) -> Result<Self, ThreadError> {
        let mut listings = listings.into_iter();
        let post_listing = listings.next().ok_or_else(|| unexpected_shape("response is empty"))?;
        let mut comment_listing = listings
            .next()
            .ok_or_else(|| unexpected_shape("comment listing is missing"))?;

        let summary = post_listing
            .data
            .children
            .iter()
            .find(|node| node.kind == POST_KIND)
            .map(ThreadSummary::from);

        Ok(Self {
            summary,
            comments: std::mem::take(&mut comment_listing.data.children),
        })
    }
}

fn unexpected_shape(detail: &str) -> ThreadError {
    ThreadError::Api {
        message: format!("unexpected thread payload shape: {detail}"),
    }
}

fn truncate_for_message(content: &str, limit: usize) -> String {
    let trimmed = content.trim();
    match trimmed.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", trimmed.get(..cut).unwrap_or(trimmed)),
        None => trimmed.to_owned(),
    }
}

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;
