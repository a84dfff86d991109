//! Fundamental types for the panchayat election model.
//!
//! This crate defines the values shared by every other crate in the workspace:
//! candidate and voter identifiers, the candidate and voter records, cast votes,
//! derived per-candidate results, the nested region tree and the tally map.

pub mod candidate;
pub mod error;
pub mod id;
pub mod region;
pub mod tally;
pub mod vote;
pub mod voter;

pub use candidate::{Candidate, CandidateResult};
pub use error::PanchayatError;
pub use id::{CandidateId, VoterId};
pub use region::Region;
pub use tally::Tally;
pub use vote::Vote;
pub use voter::Voter;
