//! Schema resolution error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving, loading or evaluating a bracket schema
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The index document carried no configuration mapping
    #[error("Schema configuration index is not initialized")]
    IndexNotInitialized,

    /// No entry for this total player count
    #[error("No schema configured for {total_players} players")]
    NoConfigForPlayerCount { total_players: u32 },

    /// Player count is known but the group size is not
    #[error("No schema configured for {total_players} players and group size {group_size}")]
    NoConfigForGroupSize { total_players: u32, group_size: u32 },

    /// Stored schema name is empty, absolute or leaves the schema root
    #[error("Schema name {0:?} must be a relative path inside the schema root")]
    InvalidSchemaName(String),

    /// Document path does not exist
    #[error("File not found: {}", .0.display())]
    FileMissing(PathBuf),

    /// Document is empty, `null` or not well-formed JSON
    #[error("Empty or invalid document {}: {reason}", path.display())]
    EmptyOrInvalidDocument { path: PathBuf, reason: String },

    /// Well-formed JSON that does not have the expected shape
    #[error("Schema parse error in {}: {source}", path.display())]
    SchemaParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// No qualification rule for the requested group size
    #[error("No qualification rule for group size {0}")]
    NoQualificationRule(u32),

    /// Round lookup by number failed
    #[error("No such round: {0}")]
    RoundNotFound(u32),

    /// Any other read failure
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SchemaError {
    /// Get a message suitable for showing to the person at the terminal
    ///
    /// Parser internals (line/column, serde's expected-type wording) stay in
    /// the `Display` output used for logging.
    pub fn client_message(&self) -> String {
        match self {
            SchemaError::SchemaParseError { path, .. } => {
                format!("Schema document {} has an unexpected shape", path.display())
            }
            SchemaError::EmptyOrInvalidDocument { path, .. } => {
                format!("Schema document {} is empty or not valid JSON", path.display())
            }
            _ => self.to_string(),
        }
    }
}

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;
