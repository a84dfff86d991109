//! Copy-on-write tally updates.

use panchayat_types::{CandidateId, Tally};

/// Return a new tally with `candidate`'s count incremented by one.
///
/// A candidate not yet in the tally starts at 1. `current` is left untouched.
pub fn tally_pure(current: &Tally, candidate: &CandidateId) -> Tally {
    let mut counts = current.as_map().clone();
    *counts.entry(candidate.clone()).or_insert(0) += 1;
    Tally::from(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> CandidateId {
        CandidateId::new(s)
    }

    #[test]
    fn test_increments_existing_count() {
        let original: Tally = [(id("a"), 1)].into_iter().collect();
        let updated = tally_pure(&original, &id("a"));

        assert_eq!(updated.get(&id("a")), Some(2));
        assert_eq!(original.get(&id("a")), Some(1));
        assert_ne!(updated, original);
    }

    #[test]
    fn test_adds_missing_candidate() {
        let original: Tally = [(id("cand1"), 5), (id("cand2"), 3)].into_iter().collect();
        let updated = tally_pure(&original, &id("cand3"));

        assert_eq!(updated.get(&id("cand3")), Some(1));
        assert_eq!(updated.len(), 3);
        assert_eq!(original.len(), 2);
        assert_eq!(original.get(&id("cand3")), None);
    }

    #[test]
    fn test_results_are_independent() {
        let empty = Tally::new();
        let first = tally_pure(&empty, &id("a"));
        let second = tally_pure(&first, &id("a"));
        let branched = tally_pure(&first, &id("b"));

        assert!(empty.is_empty());
        assert_eq!(first.get(&id("a")), Some(1));
        assert_eq!(second.get(&id("a")), Some(2));
        assert_eq!(branched.get(&id("a")), Some(1));
        assert_eq!(branched.get(&id("b")), Some(1));
    }
}
