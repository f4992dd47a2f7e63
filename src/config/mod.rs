//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.rethread.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `RETHREAD_THREAD_URL`, `RETHREAD_SORT`, ...
//! 4. **Command-line arguments** – `--thread-url`/`-u`, `--sort`/`-s`, ...
//!
//! # Configuration File
//!
//! ```toml
//! thread_url = "https://www.reddit.com/r/rust/comments/abc123/weekly/"
//! sort = "score"
//! order = "descending"
//! export = "csv"
//! output = "thread.csv"
//! max_depth = 32
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::export::{ExportFormat, SortKey, SortOrder, SortSpec, TimestampZone};
use crate::thread::{
    DEFAULT_MAX_DEPTH, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, HttpGatewayConfig, ThreadError,
};

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `RETHREAD_THREAD_URL` or `--thread-url`: Thread to load
/// - `RETHREAD_SORT` or `--sort`: Sort key (`time` or `score`)
/// - `RETHREAD_ORDER` or `--order`: Sort direction
/// - `RETHREAD_EXPORT` or `--export`: Export format
/// - `RETHREAD_OUTPUT` or `--output`: Export destination path
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use rethread::RethreadConfig;
///
/// let config = RethreadConfig::load().expect("failed to load configuration");
/// let url = config.require_thread_url().expect("thread URL required");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "RETHREAD",
    discovery(
        dotfile_name = ".rethread.toml",
        config_file_name = "rethread.toml",
        app_name = "rethread"
    )
)]
pub struct RethreadConfig {
    /// Thread URL to load.
    ///
    /// Can be provided via:
    /// - CLI: `--thread-url <URL>` or `-u <URL>`
    /// - Environment: `RETHREAD_THREAD_URL`
    /// - Config file: `thread_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub thread_url: Option<String>,

    /// Sort key applied at every depth: `time` or `score`.
    ///
    /// When absent, comments keep their source order.
    #[ortho_config(cli_short = 's')]
    pub sort: Option<String>,

    /// Sort direction: `ascending` or `descending` (the default).
    #[ortho_config(cli_short = 'O')]
    pub order: Option<String>,

    /// Export format: `csv`, `jsonl`, or `markdown`.
    ///
    /// When absent, the thread is printed as an indented tree.
    #[ortho_config(cli_short = 'e')]
    pub export: Option<String>,

    /// Path the export is written to. Defaults to stdout.
    #[ortho_config(cli_short = 'o')]
    pub output: Option<String>,

    /// Depth ceiling applied while normalising; top-level comments sit at
    /// depth zero.
    #[ortho_config()]
    pub max_depth: usize,

    /// Renders published times in UTC rather than local time.
    #[ortho_config()]
    pub utc: bool,

    /// `User-Agent` header sent with thread requests.
    #[ortho_config()]
    pub user_agent: String,

    /// HTTP request timeout in seconds.
    #[ortho_config()]
    pub timeout_seconds: u64,

    /// Emits telemetry events as JSON lines on stderr.
    #[ortho_config()]
    pub telemetry: bool,

    /// `tracing` filter directive, e.g. `info` or `rethread=debug`.
    #[ortho_config()]
    pub log_level: String,
}

impl Default for RethreadConfig {
    fn default() -> Self {
        Self {
            thread_url: None,
            sort: None,
            order: None,
            export: None,
            output: None,
            max_depth: DEFAULT_MAX_DEPTH,
            utc: false,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            telemetry: false,
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl RethreadConfig {
    /// Returns the thread URL or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`ThreadError::MissingThreadUrl`] when no URL is configured.
    pub fn require_thread_url(&self) -> Result<&str, ThreadError> {
        self.thread_url
            .as_deref()
            .ok_or(ThreadError::MissingThreadUrl)
    }

    /// Parses the configured sort key and direction.
    ///
    /// Returns `Ok(None)` when no sort key is configured. A configured order
    /// without a key is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ThreadError::Configuration`] when either value is not
    /// recognised.
    pub fn sort_spec(&self) -> Result<Option<SortSpec>, ThreadError> {
        let Some(key) = self.sort.as_deref() else {
            return Ok(None);
        };
        let key: SortKey = key.parse()?;
        let order = self
            .order
            .as_deref()
            .map(str::parse::<SortOrder>)
            .transpose()?
            .unwrap_or_default();

        Ok(Some(SortSpec::new(key, order)))
    }

    /// Parses the configured export format, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ThreadError::Configuration`] for an unsupported format.
    pub fn export_format(&self) -> Result<Option<ExportFormat>, ThreadError> {
        self.export.as_deref().map(str::parse).transpose()
    }

    /// Returns the zone used to render published times.
    #[must_use]
    pub const fn timestamp_zone(&self) -> TimestampZone {
        if self.utc {
            TimestampZone::Utc
        } else {
            TimestampZone::Local
        }
    }

    /// Returns the HTTP timeout as a [`Duration`].
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Builds the HTTP gateway configuration from these settings.
    #[must_use]
    pub fn gateway_config(&self) -> HttpGatewayConfig {
        HttpGatewayConfig {
            user_agent: self.user_agent.clone(),
            timeout: self.timeout(),
        }
    }
}

#[cfg(test)]
mod tests;
