//! Configuration index mapping (total players, group size) to a schema file.

use crate::{
    errors::{SchemaError, SchemaResult},
    loader::read_document,
};
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    path::{Component, Path, PathBuf},
};

/// Group size to relative schema file name
pub type GroupConfigs = BTreeMap<u32, String>;

#[derive(Debug, Default, Deserialize)]
struct RawIndex {
    configurations: Option<BTreeMap<u32, GroupConfigs>>,
}

/// Lookup table from player count and group size to a schema document path
#[derive(Debug, Clone, Default)]
pub struct SchemaConfigIndex {
    configurations: Option<BTreeMap<u32, GroupConfigs>>,
    schema_root: PathBuf,
}

impl SchemaConfigIndex {
    /// Build an index from an in-memory mapping
    pub fn new(configurations: BTreeMap<u32, GroupConfigs>, schema_root: impl Into<PathBuf>) -> Self {
        Self {
            configurations: Some(configurations),
            schema_root: schema_root.into(),
        }
    }

    /// Load the index document at `path`
    ///
    /// A well-formed document without a `Configurations` mapping loads
    /// successfully but stays uninitialized; lookups on it fail with
    /// [`SchemaError::IndexNotInitialized`].
    pub fn load(path: &Path, schema_root: impl Into<PathBuf>) -> SchemaResult<Self> {
        let raw: RawIndex = read_document(path)?;
        Ok(Self {
            configurations: raw.configurations,
            schema_root: schema_root.into(),
        })
    }

    /// Whether a configuration mapping was loaded
    pub fn is_initialized(&self) -> bool {
        self.configurations.is_some()
    }

    /// Directory that resolved names are joined onto
    pub fn schema_root(&self) -> &Path {
        &self.schema_root
    }

    /// Resolve the schema document path for a tournament layout
    ///
    /// # Errors
    ///
    /// * [`SchemaError::IndexNotInitialized`] if no mapping was loaded
    /// * [`SchemaError::NoConfigForPlayerCount`] if `total_players` is unknown
    /// * [`SchemaError::NoConfigForGroupSize`] if only `group_size` is unknown
    /// * [`SchemaError::InvalidSchemaName`] if the stored name is empty,
    ///   absolute or climbs out of the schema root
    pub fn resolve(&self, total_players: u32, group_size: u32) -> SchemaResult<PathBuf> {
        let name = self
            .groups(total_players)?
            .get(&group_size)
            .ok_or(SchemaError::NoConfigForGroupSize {
                total_players,
                group_size,
            })?;

        if !is_contained(Path::new(name)) {
            return Err(SchemaError::InvalidSchemaName(name.clone()));
        }

        Ok(self.schema_root.join(name))
    }

    /// Configured player counts, ascending
    pub fn player_counts(&self) -> SchemaResult<Vec<u32>> {
        let configurations = self
            .configurations
            .as_ref()
            .ok_or(SchemaError::IndexNotInitialized)?;
        Ok(configurations.keys().copied().collect())
    }

    /// Configured group sizes for a player count, ascending
    pub fn group_sizes(&self, total_players: u32) -> SchemaResult<Vec<u32>> {
        Ok(self.groups(total_players)?.keys().copied().collect())
    }

    fn groups(&self, total_players: u32) -> SchemaResult<&GroupConfigs> {
        self.configurations
            .as_ref()
            .ok_or(SchemaError::IndexNotInitialized)?
            .get(&total_players)
            .ok_or(SchemaError::NoConfigForPlayerCount { total_players })
    }
}

/// A plain relative path that stays below the directory it is joined onto
fn is_contained(name: &Path) -> bool {
    let mut components = name.components().peekable();
    components.peek().is_some()
        && components.all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
