//! Bracket schema data models.

use crate::errors::{SchemaError, SchemaResult};
use serde::Serialize;

/// A parsed tournament bracket document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TournamentSchema {
    /// Tournament name
    pub name: String,
    /// Rounds in declaration order
    pub rounds: Vec<Round>,
}

impl TournamentSchema {
    /// Get a round by its number
    ///
    /// Round numbers need not be contiguous. When a document repeats a
    /// number, the first round declared with it wins.
    pub fn round(&self, number: u32) -> SchemaResult<&Round> {
        self.rounds
            .iter()
            .find(|round| round.number == number)
            .ok_or(SchemaError::RoundNotFound(number))
    }

    /// Distinct players seated in a round, in order of first appearance
    ///
    /// A player's seat number is their index in the result plus one.
    pub fn players_for_round(&self, number: u32) -> SchemaResult<Vec<&str>> {
        let round = self.round(number)?;

        let mut players: Vec<&str> = Vec::new();
        for player in round.matches.iter().flat_map(|m| m.players.iter()) {
            if !players.contains(&player.as_str()) {
                players.push(player);
            }
        }
        Ok(players)
    }
}

/// One stage of the tournament
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Round {
    /// Round number (lookup key)
    pub number: u32,
    /// Free-form description
    pub description: String,
    /// Matches played in this round
    pub matches: Vec<Match>,
    /// Rules deciding who advances out of this round's groups
    pub qualification_rules: Vec<QualificationRule>,
}

impl Round {
    /// Get the match carrying the given group label
    pub fn group(&self, label: &str) -> Option<&Match> {
        self.matches
            .iter()
            .find(|m| m.group.as_deref() == Some(label))
    }

    /// Labels of all grouped matches in declaration order
    pub fn group_labels(&self) -> impl Iterator<Item = &str> {
        self.matches.iter().filter_map(|m| m.group.as_deref())
    }
}

/// A single match (or group table) within a round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Group label, if this match is a group
    pub group: Option<String>,
    /// Players in seating order (not rank order), duplicates allowed
    pub players: Vec<String>,
    /// Physical table number
    pub table: Option<u32>,
    /// Match type, e.g. "group" or "final"
    pub match_type: String,
}

/// Declarative rule mapping a group size to advancing rank positions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QualificationRule {
    pub description: String,
    pub criteria: Criteria,
}

/// Qualification criteria
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Criteria {
    /// Group size this rule applies to
    pub group_size: Option<u32>,
    /// 1-based rank positions that advance, in advancement order
    pub advancing_positions: Vec<u32>,
    /// Also emit `X<position>` placeholders after the real players
    pub special: bool,
    /// Cap on advancing players; carried, not enforced by the resolver
    pub limit: Option<u32>,
    /// Pre-assigned advancing labels; carried, not used by the resolver
    pub assigned_advancing_positions: Vec<String>,
}
