//! Comparator factories for ordering result rows.
//!
//! Meant to be handed to [`crate::ElectionRegistry::get_results_by`], e.g.
//! `registry.get_results_by(create_sorter(ResultField::Name, SortOrder::Asc))`.

use panchayat_types::CandidateResult;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which column of a [`CandidateResult`] to sort on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultField {
    Id,
    Name,
    Party,
    Votes,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Build a comparator on `field` in the given `order`.
///
/// Text columns compare lexicographically, `votes` numerically. Equal keys
/// compare `Equal`, so a stable sort keeps their existing order.
pub fn create_sorter(
    field: ResultField,
    order: SortOrder,
) -> impl Fn(&CandidateResult, &CandidateResult) -> Ordering {
    move |a: &CandidateResult, b: &CandidateResult| {
        let ascending = match field {
            ResultField::Id => a.id.cmp(&b.id),
            ResultField::Name => a.name.cmp(&b.name),
            ResultField::Party => a.party.cmp(&b.party),
            ResultField::Votes => a.votes.cmp(&b.votes),
        };
        match order {
            SortOrder::Asc => ascending,
            SortOrder::Desc => ascending.reverse(),
        }
    }
}
