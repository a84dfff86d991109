use panchayat_types::{CandidateId, VoterId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ElectionError {
    #[error("an election needs at least one candidate")]
    NoCandidates,

    #[error("candidate {0} is listed more than once")]
    DuplicateCandidate(CandidateId),

    #[error("voter {0} is not registered")]
    VoterNotRegistered(VoterId),

    #[error("candidate {0} is not on the ballot")]
    UnknownCandidate(CandidateId),

    #[error("voter {0} has already voted")]
    AlreadyVoted(VoterId),

    #[error("region {0} has no vote count")]
    MissingRegionVotes(String),

    #[error("vote count overflow while summing region {0}")]
    VoteCountOverflow(String),

    #[error("config error: {0}")]
    Config(String),
}
