//! Identifier types for candidates and voters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a candidate on the ballot (e.g. `"C1"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CandidateId(String);

impl CandidateId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CandidateId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CandidateId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identifies a voter in the electoral roll (e.g. `"V1"`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VoterId(String);

impl VoterId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VoterId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VoterId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}
