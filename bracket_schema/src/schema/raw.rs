//! On-disk shape of a schema document and its normalization.
//!
//! Every field is optional here. Normalization turns absent collections into
//! empty ones so the models in [`super::models`] never carry "missing".
//!
//! Keys are matched in lowercase: the loader folds every object key before
//! deserializing, so `TournamentName`, `tournamentName` and `tournamentname`
//! all land on the same field.

use super::models::{Criteria, Match, QualificationRule, Round, TournamentSchema};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct RawSchema {
    #[serde(rename = "tournamentname")]
    pub tournament_name: Option<String>,
    pub rounds: Option<Vec<RawRound>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawRound {
    #[serde(rename = "roundnumber")]
    pub round_number: Option<u32>,
    pub description: Option<String>,
    pub matches: Option<Vec<RawMatch>>,
    #[serde(rename = "qualificationrules")]
    pub qualification_rules: Option<Vec<RawQualificationRule>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawMatch {
    pub group: Option<String>,
    pub players: Option<Vec<String>>,
    pub table: Option<u32>,
    #[serde(rename = "matchtype")]
    pub match_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawQualificationRule {
    pub description: Option<String>,
    pub criteria: Option<RawCriteria>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RawCriteria {
    #[serde(rename = "groupsize")]
    pub group_size: Option<u32>,
    #[serde(rename = "advancingpositions")]
    pub advancing_positions: Option<Vec<u32>>,
    pub special: Option<bool>,
    pub limit: Option<u32>,
    #[serde(rename = "assignedadvancingpositions")]
    pub assigned_advancing_positions: Option<Vec<String>>,
}

fn normalize_all<R, T: From<R>>(raw: Option<Vec<R>>) -> Vec<T> {
    raw.unwrap_or_default().into_iter().map(T::from).collect()
}

impl From<RawSchema> for TournamentSchema {
    fn from(raw: RawSchema) -> Self {
        Self {
            name: raw.tournament_name.unwrap_or_default(),
            rounds: normalize_all(raw.rounds),
        }
    }
}

impl From<RawRound> for Round {
    fn from(raw: RawRound) -> Self {
        Self {
            number: raw.round_number.unwrap_or_default(),
            description: raw.description.unwrap_or_default(),
            matches: normalize_all(raw.matches),
            qualification_rules: normalize_all(raw.qualification_rules),
        }
    }
}

impl From<RawMatch> for Match {
    fn from(raw: RawMatch) -> Self {
        Self {
            group: raw.group,
            players: raw.players.unwrap_or_default(),
            table: raw.table,
            match_type: raw.match_type.unwrap_or_default(),
        }
    }
}

impl From<RawQualificationRule> for QualificationRule {
    fn from(raw: RawQualificationRule) -> Self {
        Self {
            description: raw.description.unwrap_or_default(),
            criteria: raw.criteria.map(Criteria::from).unwrap_or_default(),
        }
    }
}

impl From<RawCriteria> for Criteria {
    fn from(raw: RawCriteria) -> Self {
        Self {
            group_size: raw.group_size,
            advancing_positions: raw.advancing_positions.unwrap_or_default(),
            special: raw.special.unwrap_or_default(),
            limit: raw.limit,
            assigned_advancing_positions: raw.assigned_advancing_positions.unwrap_or_default(),
        }
    }
}
