//! Error types exposed by the thread intake and export layers.

use thiserror::Error;

/// Errors surfaced while loading, normalising, or exporting a thread.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ThreadError {
    /// No thread URL was configured.
    #[error("thread URL is required")]
    MissingThreadUrl,

    /// The provided URL could not be parsed.
    #[error("thread URL is invalid: {0}")]
    InvalidUrl(String),

    /// The URL path does not identify a thread.
    #[error("thread URL must contain /comments/<id>")]
    MissingPathSegments,

    /// A comment entry lacks a field the canonical tree requires.
    #[error("comment {id} is missing required field '{field}'")]
    InvalidInput {
        /// Identifier of the offending entry, or `<unknown>` when absent.
        id: String,
        /// Name of the missing field.
        field: &'static str,
    },

    /// The upstream API answered with an error or an unexpected payload.
    #[error("thread API error: {message}")]
    Api {
        /// Status and body detail describing the failure.
        message: String,
    },

    /// Networking failed while calling the thread API.
    #[error("network error fetching thread: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or holds an unsupported value.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl ThreadError {
    /// Builds a [`ThreadError::Io`] from a standard I/O error.
    #[must_use]
    pub fn io(error: &std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
