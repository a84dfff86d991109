//! Panchayat election model.
//!
//! An [`ElectionRegistry`] holds a fixed ballot of candidates, an electoral
//! roll and a ballot box. Voters register once, vote once, and results are
//! computed on demand from the recorded votes.
//!
//! Alongside the registry sit stateless helpers that need no registry:
//! - [`create_vote_validator`] builds a reusable voter check from rules.
//! - [`count_votes_in_regions`] totals a nested region tree.
//! - [`tally_pure`] produces an updated tally without touching the old one.
//! - [`create_sorter`] builds comparators for [`ElectionRegistry::get_results_by`].

pub mod config;
pub mod error;
pub mod regions;
pub mod registry;
pub mod sorter;
pub mod tally;
pub mod validator;

pub use config::ElectionConfig;
pub use error::ElectionError;
pub use regions::count_votes_in_regions;
pub use registry::{ElectionRegistry, VOTE_REJECTED};
pub use sorter::{create_sorter, ResultField, SortOrder};
pub use tally::tally_pure;
pub use validator::{create_vote_validator, Validation, ValidationRules};
