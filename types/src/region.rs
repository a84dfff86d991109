//! Nested administrative regions carrying vote counts.

use crate::error::PanchayatError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A region in the counting hierarchy (district → block → village ...).
///
/// A leaf has `sub_regions == None`. An internal node may have an empty list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub votes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_regions: Option<Vec<Region>>,
}

impl Region {
    /// A leaf region with its own count.
    pub fn leaf(name: impl Into<String>, votes: u64) -> Self {
        Self {
            name: name.into(),
            votes: Some(votes),
            sub_regions: None,
        }
    }

    /// An internal region with its own count and children.
    pub fn node(name: impl Into<String>, votes: u64, sub_regions: Vec<Region>) -> Self {
        Self {
            name: name.into(),
            votes: Some(votes),
            sub_regions: Some(sub_regions),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.sub_regions.is_none()
    }

    /// Parse a region tree from a JSON value.
    ///
    /// `null` and other non-object values yield `Ok(None)`.
    pub fn from_json(value: &Value) -> Result<Option<Self>, PanchayatError> {
        if !value.is_object() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(value.clone())?))
    }
}
