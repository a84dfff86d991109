//! Candidates on the ballot and the per-candidate result rows derived from votes.

use crate::id::CandidateId;
use serde::{Deserialize, Serialize};

/// A candidate standing in the election. Identity is `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub party: String,
}

impl Candidate {
    pub fn new(
        id: impl Into<CandidateId>,
        name: impl Into<String>,
        party: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            party: party.into(),
        }
    }
}

/// One row of election results: a candidate's details plus their vote count.
///
/// Derived on demand from the cast votes, never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateResult {
    pub id: CandidateId,
    pub name: String,
    pub party: String,
    pub votes: u64,
}

impl CandidateResult {
    /// Build a result row for `candidate` with the given count.
    pub fn new(candidate: &Candidate, votes: u64) -> Self {
        Self {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            party: candidate.party.clone(),
            votes,
        }
    }
}
