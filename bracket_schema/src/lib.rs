//! # Bracket Schema
//!
//! Resolves a tournament bracket definition from a player count and group
//! size, then decides which players advance out of each group according to
//! the qualification rules the bracket declares.
//!
//! ## Architecture
//!
//! A request flows through four steps:
//!
//! - **Index**: `(total players, group size)` is looked up in the
//!   configuration index to find a schema document
//! - **Loader**: the JSON document is read and normalized into a
//!   [`TournamentSchema`]; absent collections become empty ones
//! - **Schema**: rounds, matches and rules are queried by the caller
//! - **Qualification**: a group's ranked standing is mapped to the list of
//!   advancing players
//!
//! [`TournamentProcessor`] drives these steps and is the one place where
//! errors are caught and turned into a [`UserFacingError`].
//!
//! ## Example
//!
//! ```no_run
//! use bracket_schema::{Settings, TournamentProcessor};
//!
//! let processor = TournamentProcessor::new(Settings::default());
//! match processor.process_tournament(8, 4) {
//!     Ok(report) => print!("{report}"),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

/// Locations of the index and schema documents.
pub mod config;
pub mod errors;
/// Configuration index lookup.
pub mod index;
pub mod loader;
pub mod processor;
pub mod qualification;
pub mod report;
/// Schema data models.
pub mod schema;

pub use config::{ConfigError, Settings};
pub use errors::{SchemaError, SchemaResult};
pub use index::SchemaConfigIndex;
pub use processor::{TournamentProcessor, UserFacingError};
pub use qualification::{advancing_from_rule, advancing_players};
pub use report::{Advancement, TournamentReport};
pub use schema::{Criteria, Match, QualificationRule, Round, TournamentSchema};
