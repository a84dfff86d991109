//! Voter records as they arrive from outside the registry.
//!
//! Every field is optional: a record is external input and only the fields
//! actually present matter. Unknown keys are kept in `extra` so that rules
//! can require fields beyond the three the registry itself checks.

use crate::error::PanchayatError;
use crate::id::VoterId;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A voter record, possibly incomplete.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Voter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<VoterId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Any other fields carried by the record.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Voter {
    /// A complete record with `id`, `name` and `age` present.
    pub fn new(id: impl Into<VoterId>, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
            age: Some(age),
            extra: BTreeMap::new(),
        }
    }

    /// Set a field, replacing any previous value under `key`.
    ///
    /// `id`, `name` and `age` land in their typed fields and must have the
    /// matching JSON type (`null` clears them). Any other key goes to `extra`.
    pub fn with_field(
        mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<Self, PanchayatError> {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            "id" => self.id = serde_json::from_value(value)?,
            "name" => self.name = serde_json::from_value(value)?,
            "age" => self.age = serde_json::from_value(value)?,
            other => {
                self.extra.insert(other.to_string(), value);
            }
        }
        Ok(self)
    }

    /// Whether the record carries a field called `field`.
    pub fn has_field(&self, field: &str) -> bool {
        match field {
            "id" => self.id.is_some(),
            "name" => self.name.is_some(),
            "age" => self.age.is_some(),
            other => self.extra.contains_key(other),
        }
    }

    /// Parse a voter from a JSON value.
    ///
    /// `null` and other non-object values yield `Ok(None)` (no voter).
    pub fn from_json(value: &Value) -> Result<Option<Self>, PanchayatError> {
        if !value.is_object() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(value.clone())?))
    }
}
