//! The election registry: candidates, the electoral roll and the ballot box.
//!
//! Candidates are fixed when the registry is created. Registered voters and
//! cast votes only ever accumulate. All state is private; the methods here
//! are the only way to read or change it.
//!
//! Key principle: one voter = one vote.

use crate::config::ElectionConfig;
use crate::error::ElectionError;
use panchayat_types::{Candidate, CandidateId, CandidateResult, Tally, Vote, Voter, VoterId};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Message handed to the `on_error` continuation of [`ElectionRegistry::cast_vote`].
///
/// The same message is used whatever the cause. Use
/// [`ElectionRegistry::try_cast_vote`] to learn which check failed.
pub const VOTE_REJECTED: &str = "You can't cast vote.";

/// Owns one election's candidates, registered voters and votes.
pub struct ElectionRegistry {
    /// Ballot order as supplied at creation.
    candidates: Vec<Candidate>,
    /// Registered voters by id.
    voters: HashMap<VoterId, Voter>,
    /// Votes in the order they were cast.
    votes: Vec<Vote>,
    /// Index of voters present in `votes`.
    voted: HashSet<VoterId>,
    min_voting_age: u32,
}

impl ElectionRegistry {
    /// Create a registry with the default configuration.
    pub fn new(candidates: Vec<Candidate>) -> Result<Self, ElectionError> {
        Self::with_config(candidates, &ElectionConfig::default())
    }

    /// Create a registry honouring `config`.
    ///
    /// Fails if `candidates` is empty or lists the same id twice.
    pub fn with_config(
        candidates: Vec<Candidate>,
        config: &ElectionConfig,
    ) -> Result<Self, ElectionError> {
        if candidates.is_empty() {
            return Err(ElectionError::NoCandidates);
        }
        let mut seen = HashSet::new();
        for candidate in &candidates {
            if !seen.insert(&candidate.id) {
                return Err(ElectionError::DuplicateCandidate(candidate.id.clone()));
            }
        }
        Ok(Self {
            candidates,
            voters: HashMap::new(),
            votes: Vec::new(),
            voted: HashSet::new(),
            min_voting_age: config.min_voting_age,
        })
    }

    /// Add a voter to the electoral roll.
    ///
    /// Returns `false` and leaves the roll unchanged if the voter is absent,
    /// lacks an `id`, `name` or `age`, is under the minimum voting age, or
    /// shares an `id` with someone already registered.
    pub fn register_voter(&mut self, voter: impl Into<Option<Voter>>) -> bool {
        let Some(voter) = voter.into() else {
            tracing::trace!("rejected registration without a voter");
            return false;
        };
        let (Some(id), Some(_), Some(age)) = (&voter.id, &voter.name, voter.age) else {
            tracing::debug!(voter = ?voter.id, "rejected incomplete voter record");
            return false;
        };
        if age < self.min_voting_age {
            tracing::debug!(voter = %id, age, min = self.min_voting_age, "rejected under-age voter");
            return false;
        }
        if self.voters.contains_key(id) {
            tracing::debug!(voter = %id, "rejected duplicate registration");
            return false;
        }

        let id = id.clone();
        tracing::debug!(voter = %id, "voter registered");
        self.voters.insert(id, voter);
        true
    }

    /// Record a vote, reporting which check failed on rejection.
    ///
    /// The voter must be registered, the candidate must be on the ballot, and
    /// the voter must not have voted before.
    pub fn try_cast_vote(
        &mut self,
        voter_id: impl Into<VoterId>,
        candidate_id: impl Into<CandidateId>,
    ) -> Result<Vote, ElectionError> {
        let voter_id = voter_id.into();
        let candidate_id = candidate_id.into();

        if !self.voters.contains_key(&voter_id) {
            return Err(ElectionError::VoterNotRegistered(voter_id));
        }
        if !self.is_candidate(&candidate_id) {
            return Err(ElectionError::UnknownCandidate(candidate_id));
        }
        if self.voted.contains(&voter_id) {
            return Err(ElectionError::AlreadyVoted(voter_id));
        }

        tracing::debug!(voter = %voter_id, candidate = %candidate_id, "vote recorded");
        let vote = Vote::new(voter_id.clone(), candidate_id);
        self.voted.insert(voter_id);
        self.votes.push(vote.clone());
        Ok(vote)
    }

    /// Record a vote and hand the outcome to one of two continuations.
    ///
    /// On success `on_success` receives the recorded vote; otherwise
    /// `on_error` receives [`VOTE_REJECTED`]. Whichever runs does so before
    /// this returns, and its return value is passed back to the caller.
    pub fn cast_vote<T, S, E>(
        &mut self,
        voter_id: impl Into<VoterId>,
        candidate_id: impl Into<CandidateId>,
        on_success: S,
        on_error: E,
    ) -> T
    where
        S: FnOnce(Vote) -> T,
        E: FnOnce(String) -> T,
    {
        match self.try_cast_vote(voter_id, candidate_id) {
            Ok(vote) => on_success(vote),
            Err(e) => {
                tracing::debug!(reason = %e, "vote rejected");
                on_error(VOTE_REJECTED.to_string())
            }
        }
    }

    /// Per-candidate results, most votes first.
    ///
    /// Candidates with equal counts stay in ballot order.
    pub fn get_results(&self) -> Vec<CandidateResult> {
        self.get_results_by(|a, b| b.votes.cmp(&a.votes))
    }

    /// Per-candidate results ordered by `compare` (stable).
    pub fn get_results_by<F>(&self, compare: F) -> Vec<CandidateResult>
    where
        F: FnMut(&CandidateResult, &CandidateResult) -> Ordering,
    {
        let tally = self.tally();
        let mut results: Vec<CandidateResult> = self
            .candidates
            .iter()
            .map(|c| CandidateResult::new(c, tally.get(&c.id).unwrap_or(0)))
            .collect();
        results.sort_by(compare);
        results
    }

    /// The candidate with the most votes, or `None` before any vote is cast.
    ///
    /// On a tie the candidate earliest on the ballot wins.
    pub fn get_winner(&self) -> Option<&Candidate> {
        if self.votes.is_empty() {
            return None;
        }
        let results = self.get_results();
        let best = results
            .iter()
            .reduce(|best, r| if r.votes > best.votes { r } else { best })?;
        self.candidates.iter().find(|c| c.id == best.id)
    }

    /// Vote counts per candidate that has received at least one vote.
    pub fn tally(&self) -> Tally {
        let mut counts: BTreeMap<CandidateId, u64> = BTreeMap::new();
        for vote in &self.votes {
            *counts.entry(vote.candidate_id.clone()).or_insert(0) += 1;
        }
        Tally::from(counts)
    }

    /// Candidates in ballot order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn registered_voter_count(&self) -> usize {
        self.voters.len()
    }

    pub fn is_registered(&self, voter_id: &VoterId) -> bool {
        self.voters.contains_key(voter_id)
    }

    pub fn has_voted(&self, voter_id: &VoterId) -> bool {
        self.voted.contains(voter_id)
    }

    pub fn vote_count(&self) -> usize {
        self.votes.len()
    }

    fn is_candidate(&self, candidate_id: &CandidateId) -> bool {
        self.candidates.iter().any(|c| &c.id == candidate_id)
    }
}
