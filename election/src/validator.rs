//! Voter validation built from a set of rules.

use panchayat_types::Voter;
use serde::{Deserialize, Serialize};

/// What a voter record must satisfy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRules {
    pub min_age: u32,
    pub required_fields: Vec<String>,
}

/// Outcome of validating one voter record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validation {
    pub valid: bool,
    /// Names the last missing required field; empty otherwise.
    ///
    /// Being under age makes the record invalid but does not set a reason.
    pub reason: String,
}

/// Build a validator closure from `rules`.
///
/// The returned function owns its rules and never modifies the voter it checks.
/// A field whose JSON value was `null` counts as missing.
pub fn create_vote_validator(rules: ValidationRules) -> impl Fn(&Voter) -> Validation {
    move |voter: &Voter| {
        let mut valid = true;
        let mut reason = String::new();

        if matches!(voter.age, Some(age) if age < rules.min_age) {
            valid = false;
        }

        for field in &rules.required_fields {
            if !voter.has_field(field) {
                valid = false;
                reason = format!("Field: {field} not present.");
            }
        }

        Validation { valid, reason }
    }
}
