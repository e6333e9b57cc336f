//! Tournament bracket schema: rounds, matches and qualification rules.

pub mod models;
pub(crate) mod raw;

pub use models::{Criteria, Match, QualificationRule, Round, TournamentSchema};
