//! Typed menu choices for the line-oriented modes.

use crate::types::StackAction;
use crate::MenuCommand;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChoiceError {
    #[error("empty input")]
    Empty,
    #[error("invalid choice: {0}")]
    Invalid(String),
}

/// Parse one line of input.
///
/// Accepts the menu number (`0`..`7`) or an action name (`play`,
/// `useReserved`, ...), plus `quit`/`exit`. Surrounding whitespace is ignored.
pub fn parse_choice(line: &str) -> Result<MenuCommand, ChoiceError> {
    let s = line.trim();
    if s.is_empty() {
        return Err(ChoiceError::Empty);
    }

    if let Ok(n) = s.parse::<u8>() {
        if n == 0 {
            return Ok(MenuCommand::Quit);
        }
        return StackAction::from_menu_number(n)
            .map(MenuCommand::Action)
            .ok_or_else(|| ChoiceError::Invalid(s.to_string()));
    }

    match s.to_lowercase().as_str() {
        "quit" | "exit" | "q" => Ok(MenuCommand::Quit),
        other => StackAction::from_str(other)
            .map(MenuCommand::Action)
            .ok_or_else(|| ChoiceError::Invalid(s.to_string())),
    }
}
