//! Per-candidate vote counts as an immutable value.

use crate::id::CandidateId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from candidate to vote count.
///
/// There are no in-place mutators: producing an updated tally means building
/// a new one (see `panchayat_election::tally_pure`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tally(BTreeMap<CandidateId, u64>);

impl Tally {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Count for `candidate`, if it appears in the tally.
    pub fn get(&self, candidate: &CandidateId) -> Option<u64> {
        self.0.get(candidate).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CandidateId, u64)> {
        self.0.iter().map(|(k, v)| (k, *v))
    }

    pub fn as_map(&self) -> &BTreeMap<CandidateId, u64> {
        &self.0
    }
}

impl From<BTreeMap<CandidateId, u64>> for Tally {
    fn from(counts: BTreeMap<CandidateId, u64>) -> Self {
        Self(counts)
    }
}

impl FromIterator<(CandidateId, u64)> for Tally {
    fn from_iter<I: IntoIterator<Item = (CandidateId, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
