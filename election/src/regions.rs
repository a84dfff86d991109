//! Recursive vote counting over a nested region tree.

use crate::error::ElectionError;
use panchayat_types::Region;

/// Total votes in `tree`: the node's own count plus every descendant's.
///
/// `None` counts as zero. A node without a `votes` field is rejected rather
/// than silently treated as zero.
pub fn count_votes_in_regions(tree: Option<&Region>) -> Result<u64, ElectionError> {
    match tree {
        None => Ok(0),
        Some(region) => count_region(region),
    }
}

fn count_region(region: &Region) -> Result<u64, ElectionError> {
    let own = region
        .votes
        .ok_or_else(|| ElectionError::MissingRegionVotes(region.name.clone()))?;

    let Some(children) = &region.sub_regions else {
        return Ok(own);
    };

    children.iter().try_fold(own, |total, child| {
        total
            .checked_add(count_region(child)?)
            .ok_or_else(|| ElectionError::VoteCountOverflow(region.name.clone()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_counts_zero() {
        assert_eq!(count_votes_in_regions(None).unwrap(), 0);
    }

    #[test]
    fn test_leaf_returns_own_votes() {
        let leaf = Region::leaf("Ward 1", 42);
        assert_eq!(count_votes_in_regions(Some(&leaf)).unwrap(), 42);
    }

    #[test]
    fn test_nested_tree_sums_depth_first() {
        let tree = Region::node(
            "R",
            5,
            vec![Region::leaf("r1", 3), Region::node("r2", 2, vec![])],
        );
        assert_eq!(count_votes_in_regions(Some(&tree)).unwrap(), 10);
    }

    #[test]
    fn test_deep_tree() {
        let tree = Region::node(
            "District",
            1,
            vec![
                Region::node(
                    "Block A",
                    2,
                    vec![Region::leaf("Village 1", 10), Region::leaf("Village 2", 20)],
                ),
                Region::node("Block B", 0, vec![Region::leaf("Village 3", 7)]),
            ],
        );
        assert_eq!(count_votes_in_regions(Some(&tree)).unwrap(), 40);
    }

    #[test]
    fn test_missing_votes_is_rejected() {
        let tree = Region::node(
            "R",
            5,
            vec![Region {
                name: "blank".to_string(),
                votes: None,
                sub_regions: None,
            }],
        );
        let err = count_votes_in_regions(Some(&tree)).unwrap_err();
        assert!(matches!(err, ElectionError::MissingRegionVotes(ref name) if name == "blank"));
    }

    #[test]
    fn test_overflow_is_rejected() {
        let tree = Region::node("R", u64::MAX, vec![Region::leaf("r1", 1)]);
        assert!(matches!(
            count_votes_in_regions(Some(&tree)),
            Err(ElectionError::VoteCountOverflow(_))
        ));
    }

    #[test]
    fn test_input_is_not_mutated() {
        let tree = Region::node("R", 5, vec![Region::leaf("r1", 3)]);
        let before = tree.clone();
        count_votes_in_regions(Some(&tree)).unwrap();
        assert_eq!(tree, before);
    }
}
