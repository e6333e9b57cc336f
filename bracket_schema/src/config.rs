//! Location settings for the index and schema documents.
//!
//! Consolidates the environment variable reads so the rest of the crate only
//! ever sees validated paths.

use std::path::PathBuf;

/// Default path of the configuration index document
pub const DEFAULT_INDEX_PATH: &str = "config.json";

/// Default directory the index's schema names resolve against
pub const DEFAULT_SCHEMA_ROOT: &str = "schema/";

/// Environment variable overriding [`DEFAULT_INDEX_PATH`]
pub const INDEX_PATH_VAR: &str = "BRACKET_INDEX_PATH";

/// Environment variable overriding [`DEFAULT_SCHEMA_ROOT`]
pub const SCHEMA_ROOT_VAR: &str = "BRACKET_SCHEMA_ROOT";

/// Where to find the index and the schema documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path of the configuration index document
    pub index_path: PathBuf,
    /// Directory schema file names are relative to
    pub schema_root: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            index_path: PathBuf::from(DEFAULT_INDEX_PATH),
            schema_root: PathBuf::from(DEFAULT_SCHEMA_ROOT),
        }
    }
}

impl Settings {
    /// Load settings from environment variables
    ///
    /// # Arguments
    ///
    /// * `index_override` - Optional index path (from CLI args)
    /// * `root_override` - Optional schema root (from CLI args)
    ///
    /// Overrides win over the environment, the environment wins over the
    /// defaults. Blank environment values are ignored.
    pub fn from_env(index_override: Option<PathBuf>, root_override: Option<PathBuf>) -> Self {
        let index_path = index_override
            .or_else(|| env_path(INDEX_PATH_VAR))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_PATH));

        let schema_root = root_override
            .or_else(|| env_path(SCHEMA_ROOT_VAR))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEMA_ROOT));

        Self {
            index_path,
            schema_root,
        }
    }

    /// Validate settings after loading
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if either path is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.index_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                var: INDEX_PATH_VAR.to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        if self.schema_root.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                var: SCHEMA_ROOT_VAR.to_string(),
                reason: "Must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
