//! Input parsing for interactive play.
//!
//! Free-form user input is the one place where an "invalid action" still
//! exists; once parsed, the engine's closed [`Action`] enum takes over and
//! no fallback branch is needed.

use felt_engine::errors::GameError;
use felt_engine::round::Action;

/// Outcome of parsing one line of user input.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid betting action
    Action(Action),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse user input into an [`Action`] or a quit request.
///
/// Accepted forms (case-insensitive):
/// - "f" or "fold" → Fold
/// - "c" or "call" → Call
/// - "r X" or "raise X" → Raise to X (absolute street total)
/// - "q" or "quit" → Quit
///
/// # Example
///
/// ```rust
/// use felt_cli::validation::{parse_player_action, ParseResult};
/// use felt_engine::round::Action;
///
/// assert_eq!(parse_player_action("fold"), ParseResult::Action(Action::Fold));
/// assert_eq!(
///     parse_player_action("raise 60"),
///     ParseResult::Action(Action::Raise(60))
/// );
/// assert_eq!(parse_player_action("q"), ParseResult::Quit);
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    match parts.as_slice() {
        [] => ParseResult::Invalid("Empty input".to_string()),
        ["f"] | ["fold"] => ParseResult::Action(Action::Fold),
        ["c"] | ["call"] => ParseResult::Action(Action::Call),
        ["q"] | ["quit"] => ParseResult::Quit,
        ["r", amount] | ["raise", amount] => match amount.parse::<u32>() {
            Ok(v) => ParseResult::Action(Action::Raise(v)),
            Err(_) => ParseResult::Invalid(format!("Raise amount must be a number: {amount:?}")),
        },
        ["r"] | ["raise"] => ParseResult::Invalid("Raise needs an amount, e.g. 'raise 60'".into()),
        _ => ParseResult::Invalid(
            GameError::InvalidAction {
                input: input.clone(),
            }
            .to_string(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!(parse_player_action("F"), ParseResult::Action(Action::Fold));
        assert_eq!(
            parse_player_action("call"),
            ParseResult::Action(Action::Call)
        );
        assert_eq!(
            parse_player_action("r 100"),
            ParseResult::Action(Action::Raise(100))
        );
        assert_eq!(parse_player_action("QUIT"), ParseResult::Quit);
    }

    #[test]
    fn rejects_garbage_with_a_message() {
        match parse_player_action("allin") {
            ParseResult::Invalid(msg) => assert!(msg.contains("Invalid action")),
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn rejects_non_numeric_raise() {
        match parse_player_action("raise lots") {
            ParseResult::Invalid(msg) => assert!(msg.contains("must be a number")),
            other => panic!("expected Invalid, got {:?}", other),
        }
    }
}
