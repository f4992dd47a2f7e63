//! URL parsing for discussion thread intake.

use url::Url;

use super::error::ThreadError;

const COMMENTS_SEGMENT: &str = "comments";
const COMMUNITY_SEGMENT: &str = "r";

/// Thread identifier wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadId(String);

impl ThreadId {
    pub(crate) fn new(value: &str) -> Result<Self, ThreadError> {
        if value.is_empty() {
            return Err(ThreadError::MissingPathSegments);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Parsed thread URL with the pieces needed to reach the JSON endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadLocator {
    origin: Url,
    community: Option<String>,
    thread_id: ThreadId,
    source: String,
}

impl ThreadLocator {
    /// Parses a thread URL such as
    /// `https://www.reddit.com/r/rust/comments/abc123/some_title/`.
    ///
    /// The community prefix is optional; the path must contain
    /// `comments/<id>`.
    ///
    /// # Errors
    ///
    /// Returns [`ThreadError::InvalidUrl`] when the input is not an http(s)
    /// URL and [`ThreadError::MissingPathSegments`] when no thread id is
    /// present.
    pub fn parse(input: &str) -> Result<Self, ThreadError> {
        let url = Url::parse(input.trim())
            .map_err(|error| ThreadError::InvalidUrl(error.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ThreadError::InvalidUrl(format!(
                "unsupported scheme '{}'",
                url.scheme()
            )));
        }
        if url.host_str().is_none() {
            return Err(ThreadError::InvalidUrl("URL has no host".to_owned()));
        }

        let segments: Vec<&str> = url
            .path_segments()
            .map(|parts| parts.filter(|part| !part.is_empty()).collect())
            .unwrap_or_default();

        let comments_at = segments
            .iter()
            .position(|segment| *segment == COMMENTS_SEGMENT)
            .ok_or(ThreadError::MissingPathSegments)?;
        let raw_id = segments
            .get(comments_at + 1)
            .ok_or(ThreadError::MissingPathSegments)?;
        let thread_id = ThreadId::new(raw_id.trim_end_matches(".json"))?;

        let community = match segments.as_slice() {
            [COMMUNITY_SEGMENT, name, COMMENTS_SEGMENT, ..] => Some((*name).to_owned()),
            _ => None,
        };

        let mut origin = url.clone();
        origin.set_path("");
        origin.set_query(None);
        origin.set_fragment(None);

        Ok(Self {
            origin,
            community,
            thread_id,
            source: input.trim().to_owned(),
        })
    }

    /// Returns the thread identifier.
    #[must_use]
    pub const fn thread_id(&self) -> &ThreadId {
        &self.thread_id
    }

    /// Returns the community name when the URL carried one.
    #[must_use]
    pub fn community(&self) -> Option<&str> {
        self.community.as_deref()
    }

    /// Returns the URL exactly as supplied (trimmed).
    #[must_use]
    pub fn source(&self) -> &str {
        self.source.as_str()
    }

    /// Builds the JSON endpoint for the thread.
    #[must_use]
    pub fn json_url(&self) -> Url {
        let mut endpoint = self.origin.clone();
        let path = self.community.as_ref().map_or_else(
            || format!("/{COMMENTS_SEGMENT}/{}.json", self.thread_id.as_str()),
            |community| {
                format!(
                    "/{COMMUNITY_SEGMENT}/{community}/{COMMENTS_SEGMENT}/{}.json",
                    self.thread_id.as_str()
                )
            },
        );
        endpoint.set_path(&path);
        endpoint.set_query(Some("raw_json=1"));
        endpoint
    }
}
