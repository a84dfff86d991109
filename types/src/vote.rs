//! A single cast vote.

use crate::id::{CandidateId, VoterId};
use serde::{Deserialize, Serialize};

/// A vote recorded in the ballot box. One per voter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub voter_id: VoterId,
    pub candidate_id: CandidateId,
}

impl Vote {
    pub fn new(voter_id: impl Into<VoterId>, candidate_id: impl Into<CandidateId>) -> Self {
        Self {
            voter_id: voter_id.into(),
            candidate_id: candidate_id.into(),
        }
    }
}
