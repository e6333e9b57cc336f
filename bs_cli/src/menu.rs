use std::fmt;

/// Menu entries of the interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Resolve and show a schema
    SelectSchema,
    /// Compute the players advancing out of a group
    Advance,
    /// Leave the program
    Exit,
}

/// Errors that can occur while parsing menu input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Menu choice outside 1-3.
    InvalidChoice(String),
    /// Not a positive whole number.
    InvalidNumber(String),
    /// Ranking without any player name.
    EmptyRanking,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChoice(value) => {
                write!(f, "Invalid choice '{}'. Please try again (1-3)", value)
            }
            Self::InvalidNumber(value) => {
                write!(f, "Invalid number '{}'. Must be a positive whole number", value)
            }
            Self::EmptyRanking => write!(
                f,
                "The ranking needs at least one player (e.g., 'Alice, Bob, Carol')"
            ),
        }
    }
}

impl std::error::Error for ParseError {}

pub const MENU: &str = "\
=================================
       Schema loader menu
=================================
1. Select schema
2. Advancing players
3. Exit

Please choose an option (1-3):";

/// Parse a menu selection.
///
/// # Examples
///
/// ```
/// use bs_cli::menu::{MenuChoice, parse_choice};
///
/// assert_eq!(parse_choice(" 1 "), Ok(MenuChoice::SelectSchema));
/// assert!(parse_choice("4").is_err());
/// ```
pub fn parse_choice(input: &str) -> Result<MenuChoice, ParseError> {
    match input.trim() {
        "1" => Ok(MenuChoice::SelectSchema),
        "2" => Ok(MenuChoice::Advance),
        "3" => Ok(MenuChoice::Exit),
        other => Err(ParseError::InvalidChoice(other.to_string())),
    }
}

/// Parse a positive count (players, group size, round number)
pub fn parse_count(input: &str) -> Result<u32, ParseError> {
    let trimmed = input.trim();
    match trimmed.parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ParseError::InvalidNumber(trimmed.to_string())),
    }
}

/// Parse a comma separated standing, best first
///
/// Names are trimmed and blank entries dropped; duplicates are kept.
pub fn parse_ranking(input: &str) -> Result<Vec<String>, ParseError> {
    let players: Vec<String> = input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();

    if players.is_empty() {
        Err(ParseError::EmptyRanking)
    } else {
        Ok(players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_choices() {
        assert_eq!(parse_choice("1"), Ok(MenuChoice::SelectSchema));
        assert_eq!(parse_choice("2\n"), Ok(MenuChoice::Advance));
        assert_eq!(parse_choice("  3"), Ok(MenuChoice::Exit));
    }

    #[test]
    fn test_parse_invalid_choice() {
        assert_eq!(
            parse_choice("exit"),
            Err(ParseError::InvalidChoice("exit".to_string()))
        );
        assert!(parse_choice("").is_err());
        assert!(
            parse_choice("9")
                .unwrap_err()
                .to_string()
                .contains("Invalid choice '9'")
        );
    }

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("16\n"), Ok(16));
        assert_eq!(
            parse_count("0"),
            Err(ParseError::InvalidNumber("0".to_string()))
        );
        assert!(parse_count("-4").is_err());
        assert!(parse_count("four").is_err());
    }

    #[test]
    fn test_parse_ranking() {
        assert_eq!(
            parse_ranking(" Alice, Bob ,,Carol ").unwrap(),
            vec!["Alice", "Bob", "Carol"]
        );
        assert_eq!(parse_ranking("Alice,Alice").unwrap().len(), 2);
    }

    #[test]
    fn test_parse_empty_ranking() {
        assert_eq!(parse_ranking(" , ,"), Err(ParseError::EmptyRanking));
        assert_eq!(parse_ranking(""), Err(ParseError::EmptyRanking));
    }
}
