//! Menu input module.
//!
//! Maps `crossterm` key events (interactive mode) and typed menu lines (plain
//! and JSON modes) into [`MenuCommand`]s. Nothing here touches the session.

pub mod choice;
pub mod map;

pub use tetris_stack_types as types;

pub use choice::{parse_choice, ChoiceError};
pub use map::{handle_key_event, should_quit};

use crate::types::StackAction;

/// A resolved menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Action(StackAction),
    Quit,
}
