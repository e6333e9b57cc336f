//! Integration tests for schema resolution and tournament processing
//!
//! These tests run the full request path against the JSON fixtures in
//! `tests/fixtures`: index lookup, document loading, normalization and
//! qualification.

use bracket_schema::{
    SchemaConfigIndex, SchemaError, Settings, TournamentProcessor, loader,
};
use std::path::{Path, PathBuf};

fn fixtures() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn settings() -> Settings {
    Settings {
        index_path: fixtures().join("config.json"),
        schema_root: fixtures().join("schema"),
    }
}

fn processor() -> TournamentProcessor {
    TournamentProcessor::new(settings())
}

// ============================================================================
// Index resolution
// ============================================================================

#[test]
fn test_resolve_every_configured_entry() {
    let index = SchemaConfigIndex::load(&settings().index_path, fixtures().join("schema")).unwrap();

    let expected = [
        (8, 4, "8_players_4_groups.json"),
        (8, 3, "8_players_4_groups.json"),
        (8, 2, "missing.json"),
        (6, 3, "empty.json"),
        (5, 5, "invalid.json"),
        (9, 3, "legacy.json"),
    ];
    for (total, group, name) in expected {
        assert_eq!(
            index.resolve(total, group).unwrap(),
            fixtures().join("schema").join(name),
            "resolve({total}, {group})"
        );
    }
}

#[test]
fn test_resolve_missing_levels_are_distinct() {
    let index = SchemaConfigIndex::load(&settings().index_path, "schema/").unwrap();

    assert!(matches!(
        index.resolve(7, 4),
        Err(SchemaError::NoConfigForPlayerCount { total_players: 7 })
    ));
    assert!(matches!(
        index.resolve(8, 5),
        Err(SchemaError::NoConfigForGroupSize {
            total_players: 8,
            group_size: 5
        })
    ));
}

#[test]
fn test_index_without_mapping_is_not_initialized() {
    let index = SchemaConfigIndex::load(&fixtures().join("no_mapping.json"), "schema/").unwrap();
    assert!(!index.is_initialized());
    assert!(matches!(
        index.resolve(8, 4),
        Err(SchemaError::IndexNotInitialized)
    ));
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_load_full_schema() {
    let schema = loader::load(&fixtures().join("schema/8_players_4_groups.json")).unwrap();

    assert_eq!(schema.name, "Spring Cup");
    assert_eq!(schema.rounds.len(), 3);

    let groups = schema.round(1).unwrap();
    assert_eq!(groups.matches.len(), 2);
    assert_eq!(groups.qualification_rules.len(), 2);
    assert_eq!(groups.qualification_rules[0].criteria.limit, Some(4));
    assert_eq!(
        groups.qualification_rules[1].criteria.assigned_advancing_positions,
        vec!["A1"]
    );

    // Rounds without rules get an empty list
    assert!(schema.round(2).unwrap().qualification_rules.is_empty());
    assert_eq!(schema.round(4).unwrap().matches[0].table, None);
    assert!(matches!(schema.round(3), Err(SchemaError::RoundNotFound(3))));
}

#[test]
fn test_load_legacy_schema_is_tolerant() {
    let schema = loader::load(&fixtures().join("schema/legacy.json")).unwrap();
    let round = schema.round(1).unwrap();

    assert_eq!(round.description, "Groups of three");
    assert!(round.matches[1].players.is_empty());
    assert!(round.qualification_rules.is_empty());
    assert_eq!(schema.players_for_round(1).unwrap(), vec!["P1", "P2", "P3"]);
}

#[test]
fn test_load_empty_file() {
    let err = loader::load(&fixtures().join("schema/empty.json")).unwrap_err();
    assert!(matches!(err, SchemaError::EmptyOrInvalidDocument { .. }));
}

#[test]
fn test_load_malformed_file() {
    let err = loader::load(&fixtures().join("schema/invalid.json")).unwrap_err();
    assert!(matches!(err, SchemaError::EmptyOrInvalidDocument { .. }));
}

// ============================================================================
// Processing boundary
// ============================================================================

#[test]
fn test_process_tournament() {
    let report = processor().process_tournament(8, 4).unwrap();

    assert_eq!(
        report.schema_path,
        fixtures().join("schema/8_players_4_groups.json")
    );
    assert_eq!(report.schema.name, "Spring Cup");

    let text = report.to_string();
    assert!(text.contains("Tournament name: Spring Cup"));
    assert!(text.contains("2. round: Semi-finals"));
    assert!(text.contains("Players: Alice, Bob, Carol, Dave"));
    assert!(text.contains("Table: not specified"));
}

#[test]
fn test_process_missing_schema_file_is_reported() {
    let err = processor().process_tournament(8, 2).unwrap_err();
    assert!(matches!(err.cause(), SchemaError::FileMissing(_)));
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_process_empty_schema_file_is_reported() {
    let err = processor().process_tournament(6, 3).unwrap_err();
    assert!(matches!(
        err.cause(),
        SchemaError::EmptyOrInvalidDocument { .. }
    ));
    assert!(err.message().contains("empty or not valid JSON"));
}

#[test]
fn test_process_unknown_layout_is_reported() {
    let err = processor().process_tournament(100, 4).unwrap_err();
    assert!(matches!(
        err.cause(),
        SchemaError::NoConfigForPlayerCount { total_players: 100 }
    ));
}

#[test]
fn test_process_lists_player_counts() {
    assert_eq!(processor().player_counts().unwrap(), vec![5, 6, 8, 9]);
}

#[test]
fn test_advance_top_two() {
    let advancement = processor()
        .advance(8, 4, 1, &["Carol", "Alice", "Dave", "Bob"])
        .unwrap();
    assert_eq!(advancement.rule, "Top two of each group advance");
    assert_eq!(advancement.players, vec!["Carol", "Alice"]);
}

#[test]
fn test_advance_round_without_rules() {
    let err = processor()
        .advance(8, 4, 2, &["Alice", "Bob"])
        .unwrap_err();
    assert!(matches!(err.cause(), SchemaError::NoQualificationRule(4)));
}

#[test]
fn test_advance_unknown_round() {
    let err = processor().advance(8, 4, 7, &["Alice"]).unwrap_err();
    assert!(matches!(err.cause(), SchemaError::RoundNotFound(7)));
}

#[test]
fn test_special_rule_from_document() {
    let schema = loader::load(&fixtures().join("schema/8_players_4_groups.json")).unwrap();
    let round = schema.round(1).unwrap();

    let players = round.advancing_players(3, &["Erin", "Frank", "Grace"]).unwrap();
    assert_eq!(players, vec!["Erin", "X1"]);
}
