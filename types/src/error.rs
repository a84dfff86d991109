//! Top-level error type shared across crates.

use thiserror::Error;

/// Common error type for the panchayat election model.
#[derive(Debug, Error)]
pub enum PanchayatError {
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for PanchayatError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
