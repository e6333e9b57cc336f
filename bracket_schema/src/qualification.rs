//! Group qualification: who advances out of a group.

use crate::{
    errors::{SchemaError, SchemaResult},
    schema::{QualificationRule, Round},
};

/// Prefix of the synthetic labels emitted for `special` rules
pub const PLACEHOLDER_PREFIX: &str = "X";

/// Find the rule governing groups of `group_size` in a round
///
/// Rules are scanned in declaration order and the first match wins.
pub fn rule_for_group_size(round: &Round, group_size: u32) -> SchemaResult<&QualificationRule> {
    round
        .qualification_rules
        .iter()
        .find(|rule| rule.criteria.group_size == Some(group_size))
        .ok_or(SchemaError::NoQualificationRule(group_size))
}

/// Compute the players advancing out of one group
///
/// Looks up the round's rule for `group_size` and applies it with
/// [`advancing_from_rule`].
pub fn advancing_players<S: AsRef<str>>(
    round: &Round,
    group_size: u32,
    ranked_players: &[S],
) -> SchemaResult<Vec<String>> {
    let rule = rule_for_group_size(round, group_size)?;
    Ok(advancing_from_rule(rule, ranked_players))
}

/// Apply a qualification rule to one group's standing
///
/// `ranked_players` is the group's final standing, best first. Each
/// advancing position (1-based) picks the player at that rank; positions
/// outside the standing are skipped so incomplete groups still resolve.
/// When the rule is `special`, an `X<position>` placeholder is appended for
/// every position that passed the same bound check, after the real players.
///
/// The rule's `limit` is not applied here.
pub fn advancing_from_rule<S: AsRef<str>>(
    rule: &QualificationRule,
    ranked_players: &[S],
) -> Vec<String> {
    let criteria = &rule.criteria;
    let in_range = |position: &&u32| (1..=ranked_players.len()).contains(&(**position as usize));

    let mut advancing: Vec<String> = criteria
        .advancing_positions
        .iter()
        .filter(in_range)
        .map(|&position| ranked_players[position as usize - 1].as_ref().to_string())
        .collect();

    if criteria.special {
        advancing.extend(
            criteria
                .advancing_positions
                .iter()
                .filter(in_range)
                .map(|position| format!("{PLACEHOLDER_PREFIX}{position}")),
        );
    }

    advancing
}

impl Round {
    /// See [`advancing_players`]
    pub fn advancing_players<S: AsRef<str>>(
        &self,
        group_size: u32,
        ranked_players: &[S],
    ) -> SchemaResult<Vec<String>> {
        advancing_players(self, group_size, ranked_players)
    }
}
