//! Reading schema and index documents from disk.

use crate::{
    errors::{SchemaError, SchemaResult},
    schema::{TournamentSchema, raw::RawSchema},
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::{fs, io, path::Path};

/// Load a tournament schema document
///
/// # Errors
///
/// * [`SchemaError::FileMissing`] if `path` does not exist
/// * [`SchemaError::EmptyOrInvalidDocument`] if the content is blank, `null`
///   or not well-formed JSON
/// * [`SchemaError::SchemaParseError`] if the JSON has the wrong shape
/// * [`SchemaError::Io`] for any other read failure
pub fn load(path: &Path) -> SchemaResult<TournamentSchema> {
    let raw: RawSchema = read_document(path)?;
    Ok(raw.into())
}

/// Keys written under an older, misspelt name
const LEGACY_KEYS: &[(&str, &str)] = &[("descripton", "description")];

/// Read and deserialize a JSON document into `T`
///
/// Syntax is checked before shape so the two failure kinds stay distinct.
/// Object keys are folded with [`fold_keys`] first.
pub(crate) fn read_document<T: DeserializeOwned>(path: &Path) -> SchemaResult<T> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(SchemaError::FileMissing(path.to_path_buf()));
        }
        Err(source) => {
            return Err(SchemaError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let invalid = |reason: String| SchemaError::EmptyOrInvalidDocument {
        path: path.to_path_buf(),
        reason,
    };

    if content.trim().is_empty() {
        return Err(invalid("document is empty".to_string()));
    }

    let value: Value = serde_json::from_str(&content).map_err(|e| invalid(e.to_string()))?;
    if value.is_null() {
        return Err(invalid("document is null".to_string()));
    }

    serde_json::from_value(fold_keys(value)).map_err(|source| SchemaError::SchemaParseError {
        path: path.to_path_buf(),
        source,
    })
}

/// Lowercase every object key, recursively
///
/// Legacy spellings map onto their current key. When two keys fold to the
/// same name, the one appearing first in the document is kept.
pub(crate) fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut folded = Map::with_capacity(map.len());
            for (key, value) in map {
                let key = canonical_key(&key);
                if !folded.contains_key(&key) {
                    folded.insert(key, fold_keys(value));
                }
            }
            Value::Object(folded)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}

fn canonical_key(key: &str) -> String {
    let lower = key.to_lowercase();
    LEGACY_KEYS
        .iter()
        .find(|(legacy, _)| *legacy == lower)
        .map(|(_, current)| current.to_string())
        .unwrap_or(lower)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("bracket_schema_loader_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file() {
        let err = load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, SchemaError::FileMissing(p) if p == Path::new("does/not/exist.json")));
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let path = scratch_file("blank.json", "  \n\t ");
        assert!(matches!(
            load(&path),
            Err(SchemaError::EmptyOrInvalidDocument { .. })
        ));
    }

    #[test]
    fn test_null_is_invalid() {
        let path = scratch_file("null.json", "null");
        assert!(matches!(
            load(&path),
            Err(SchemaError::EmptyOrInvalidDocument { .. })
        ));
    }

    #[test]
    fn test_truncated_json_is_invalid() {
        let path = scratch_file("truncated.json", r#"{ "TournamentName": "Cup", "Rounds": ["#);
        assert!(matches!(
            load(&path),
            Err(SchemaError::EmptyOrInvalidDocument { .. })
        ));
    }

    #[test]
    fn test_wrong_shape_is_parse_error() {
        let path = scratch_file("array.json", "[1, 2, 3]");
        assert!(matches!(
            load(&path),
            Err(SchemaError::SchemaParseError { .. })
        ));

        let path = scratch_file("rounds_string.json", r#"{ "Rounds": "none" }"#);
        assert!(matches!(
            load(&path),
            Err(SchemaError::SchemaParseError { .. })
        ));
    }

    #[test]
    fn test_directory_is_io_error() {
        let dir = std::env::temp_dir();
        assert!(matches!(load(&dir), Err(SchemaError::Io { .. })));
    }

    #[test]
    fn test_load_camel_case_document() {
        let path = scratch_file(
            "camel.json",
            r#"{ "tournamentName": "Cup", "rounds": [ { "roundNumber": 1, "descripton": "Groups" } ] }"#,
        );
        let schema = load(&path).unwrap();
        assert_eq!(schema.name, "Cup");
        assert_eq!(schema.rounds.len(), 1);
        assert_eq!(schema.rounds[0].number, 1);
        assert_eq!(schema.rounds[0].description, "Groups");
    }

    #[test]
    fn test_duplicate_spellings_do_not_fail() {
        let path = scratch_file(
            "both_spellings.json",
            r#"{ "Rounds": [ { "RoundNumber": 1, "Description": "a", "Descripton": "b" } ] }"#,
        );
        let schema = load(&path).unwrap();
        assert_eq!(schema.rounds[0].description, "a");
    }

    #[test]
    fn test_fold_keys_keeps_values() {
        let value: Value =
            serde_json::from_str(r#"{ "Outer": { "InnerKey": "MixedCase" }, "List": [ { "A": 1 } ] }"#)
                .unwrap();
        let folded = fold_keys(value);
        assert_eq!(folded["outer"]["innerkey"], "MixedCase");
        assert_eq!(folded["list"][0]["a"], 1);
        assert!(folded.get("Outer").is_none());
    }

    #[test]
    fn test_load_minimal_document() {
        let path = scratch_file("minimal.json", r#"{ "TournamentName": "Mini" }"#);
        let schema = load(&path).unwrap();
        assert_eq!(schema.name, "Mini");
        assert!(schema.rounds.is_empty());
    }
}
