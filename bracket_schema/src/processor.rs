//! Tournament processing entry points.
//!
//! This is the single place where schema errors are caught: every failure of
//! the index, loader, round lookup or resolver is logged once and converted
//! into a [`UserFacingError`].

use crate::{
    config::Settings,
    errors::{SchemaError, SchemaResult},
    index::SchemaConfigIndex,
    loader,
    qualification,
    report::{Advancement, TournamentReport},
};
use log::{debug, warn};
use thiserror::Error;

/// Error reported to the caller of a processing request
#[derive(Debug, Error)]
#[error("Error while processing schema: {message}")]
pub struct UserFacingError {
    message: String,
    #[source]
    cause: SchemaError,
}

impl UserFacingError {
    /// Human-readable detail, without the common prefix
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying schema error
    pub fn cause(&self) -> &SchemaError {
        &self.cause
    }
}

impl From<SchemaError> for UserFacingError {
    fn from(cause: SchemaError) -> Self {
        Self {
            message: cause.client_message(),
            cause,
        }
    }
}

/// Processes tournament requests against the configured documents
///
/// Nothing is cached: each request reads the index and the schema afresh.
#[derive(Debug, Clone, Default)]
pub struct TournamentProcessor {
    settings: Settings,
}

impl TournamentProcessor {
    /// Create a new processor
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Settings this processor reads from
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Resolve and load the schema for a tournament layout
    pub fn process_tournament(
        &self,
        total_players: u32,
        group_size: u32,
    ) -> Result<TournamentReport, UserFacingError> {
        self.load_report(total_players, group_size).map_err(reject)
    }

    /// Compute who advances out of a group in the given round
    ///
    /// `ranked_players` is the group's final standing, best first. The group
    /// size selects both the schema and the qualification rule.
    pub fn advance<S: AsRef<str>>(
        &self,
        total_players: u32,
        group_size: u32,
        round_number: u32,
        ranked_players: &[S],
    ) -> Result<Advancement, UserFacingError> {
        self.try_advance(total_players, group_size, round_number, ranked_players)
            .map_err(reject)
    }

    /// Configured player counts, for presenting choices
    pub fn player_counts(&self) -> Result<Vec<u32>, UserFacingError> {
        self.index()
            .and_then(|index| index.player_counts())
            .map_err(reject)
    }

    fn try_advance<S: AsRef<str>>(
        &self,
        total_players: u32,
        group_size: u32,
        round_number: u32,
        ranked_players: &[S],
    ) -> SchemaResult<Advancement> {
        let report = self.load_report(total_players, group_size)?;
        let round = report.schema.round(round_number)?;
        let rule = qualification::rule_for_group_size(round, group_size)?;

        Ok(Advancement {
            round: round_number,
            group_size,
            rule: rule.description.clone(),
            players: qualification::advancing_from_rule(rule, ranked_players),
        })
    }

    fn index(&self) -> SchemaResult<SchemaConfigIndex> {
        SchemaConfigIndex::load(&self.settings.index_path, self.settings.schema_root.clone())
    }

    fn load_report(&self, total_players: u32, group_size: u32) -> SchemaResult<TournamentReport> {
        let schema_path = self.index()?.resolve(total_players, group_size)?;
        debug!("Using schema {}", schema_path.display());

        let schema = loader::load(&schema_path)?;
        debug!(
            "Loaded schema '{}' with {} round(s)",
            schema.name,
            schema.rounds.len()
        );

        Ok(TournamentReport {
            schema_path,
            schema,
        })
    }
}

/// Log a failed request once and wrap it for the caller
fn reject(cause: SchemaError) -> UserFacingError {
    warn!("Schema processing failed: {cause}");
    cause.into()
}
