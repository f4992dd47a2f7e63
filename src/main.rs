//! Rethread CLI entrypoint for thread export.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use rethread::{RethreadConfig, ThreadError};
use tracing_subscriber::EnvFilter;

mod cli;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), ThreadError> {
    let config = load_config()?;
    setup_logging(&config.log_level);

    match config.export_format()? {
        Some(format) => cli::export_thread::run(&config, format),
        None => cli::view::run(&config),
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ThreadError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<RethreadConfig, ThreadError> {
    RethreadConfig::load().map_err(|error| ThreadError::Configuration {
        message: error.to_string(),
    })
}

/// Installs a stderr `tracing` subscriber; stdout carries the thread output.
fn setup_logging(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}
