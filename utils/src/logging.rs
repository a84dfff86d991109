//! Structured logging initialisation via `tracing`.
//!
//! Two output formats are supported:
//! - [`LogFormat::Human`]: readable lines for local use.
//! - [`LogFormat::Json`]: newline-delimited JSON.
//!
//! The filter level can be overridden at runtime via the `RUST_LOG`
//! environment variable. When `RUST_LOG` is not set, the caller-supplied
//! `level` string is used (e.g. `"info"`, `"debug,panchayat_election=trace"`).

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Selects the output format for structured logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Human,
    Json,
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("unknown log format {0:?}, expected \"human\" or \"json\"")]
    UnknownFormat(String),

    #[error("global subscriber already set: {0}")]
    AlreadyInitialised(String),
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnknownFormat(other.to_string())),
        }
    }
}

/// Initialise the global tracing subscriber.
///
/// # Panics
///
/// Panics if a global subscriber has already been set. Use
/// [`try_init_logging`] where that can happen (tests, embedding).
pub fn init_logging(format: LogFormat, level: &str) {
    if let Err(e) = try_init_logging(format, level) {
        panic!("{e}");
    }
}

/// Initialise the global tracing subscriber, reporting instead of panicking
/// when one is already installed.
pub fn try_init_logging(format: LogFormat, level: &str) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let result = match format {
        LogFormat::Human => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true))
            .try_init(),
    };
    result.map_err(|e| LoggingError::AlreadyInitialised(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!("human".parse::<LogFormat>().unwrap(), LogFormat::Human);
        assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
    }

    #[test]
    fn rejects_unknown_format() {
        let err = "xml".parse::<LogFormat>().unwrap_err();
        assert!(matches!(err, LoggingError::UnknownFormat(ref f) if f == "xml"));
    }

    #[test]
    #[should_panic(expected = "global subscriber already set")]
    fn init_logging_panics_when_already_set() {
        let _ = try_init_logging(LogFormat::Human, "warn");
        init_logging(LogFormat::Json, "warn");
    }

    #[test]
    fn second_init_reports_error() {
        let _ = try_init_logging(LogFormat::Human, "warn");
        let second = try_init_logging(LogFormat::Json, "warn");
        assert!(matches!(second, Err(LoggingError::AlreadyInitialised(_))));
    }
}
