//! Export format selection and document metadata.

use std::fmt;
use std::str::FromStr;

use crate::thread::{ThreadError, ThreadSummary};

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Spreadsheet-compatible comma-separated values with a header row.
    Csv,
    /// Machine-readable JSON Lines (one object per line).
    Jsonl,
    /// Human-readable Markdown outline.
    Markdown,
}

impl FromStr for ExportFormat {
    type Err = ThreadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "jsonl" | "json-lines" | "jsonlines" => Ok(Self::Jsonl),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(ThreadError::Configuration {
                message: format!(
                    "unsupported export format '{s}': valid options are 'csv', 'jsonl', or 'markdown'"
                ),
            }),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Jsonl => write!(f, "jsonl"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Thread identity shown in document headers.
#[derive(Debug, Clone, Copy)]
pub struct ThreadHeading<'a> {
    /// URL the thread was loaded from.
    pub url: &'a str,
    /// Submission metadata, when known.
    pub summary: Option<&'a ThreadSummary>,
}

impl<'a> ThreadHeading<'a> {
    /// Creates a heading for `url`.
    #[must_use]
    pub const fn new(url: &'a str, summary: Option<&'a ThreadSummary>) -> Self {
        Self { url, summary }
    }

    /// Returns the submission title, if known.
    #[must_use]
    pub fn title(self) -> Option<&'a str> {
        self.summary.and_then(|summary| summary.title.as_deref())
    }
}
