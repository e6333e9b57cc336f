//! Renderable results handed to the presentation layer.

use crate::schema::TournamentSchema;
use serde::Serialize;
use std::{fmt, path::PathBuf};

/// A loaded schema together with the path it was resolved to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TournamentReport {
    pub schema_path: PathBuf,
    pub schema: TournamentSchema,
}

impl fmt::Display for TournamentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Using schema {}.", self.schema_path.display())?;
        writeln!(f)?;
        writeln!(f, "Tournament name: {}", self.schema.name)?;

        for round in &self.schema.rounds {
            writeln!(f)?;
            writeln!(f, "{}. round: {}", round.number, round.description)?;
            for m in &round.matches {
                match &m.group {
                    Some(group) => writeln!(f, "  Match (group {group}):")?,
                    None => writeln!(f, "  Match:")?,
                }
                writeln!(f, "    Players: {}", m.players.join(", "))?;
                match m.table {
                    Some(table) => writeln!(f, "    Table: {table}")?,
                    None => writeln!(f, "    Table: not specified")?,
                }
                writeln!(f, "    Type: {}", m.match_type)?;
            }
            for rule in &round.qualification_rules {
                let positions: Vec<String> = rule
                    .criteria
                    .advancing_positions
                    .iter()
                    .map(u32::to_string)
                    .collect();
                writeln!(
                    f,
                    "  Qualification: {} (advancing positions: {})",
                    rule.description,
                    positions.join(", ")
                )?;
            }
        }

        Ok(())
    }
}

/// Players advancing out of one group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advancement {
    pub round: u32,
    pub group_size: u32,
    /// Description of the rule that was applied
    pub rule: String,
    pub players: Vec<String>,
}

impl fmt::Display for Advancement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Round {}, group size {}: {}",
            self.round, self.group_size, self.rule
        )?;
        if self.players.is_empty() {
            writeln!(f, "  Nobody advances")
        } else {
            writeln!(f, "  Advancing: {}", self.players.join(", "))
        }
    }
}
