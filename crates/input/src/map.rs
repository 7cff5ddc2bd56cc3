//! Key mapping from terminal events to menu commands.

use crate::types::StackAction;
use crate::MenuCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to menu commands.
///
/// Digits follow the menu numbering; letters are mnemonics.
pub fn handle_key_event(key: KeyEvent) -> Option<MenuCommand> {
    if should_quit(key) {
        return Some(MenuCommand::Quit);
    }

    let action = match key.code {
        KeyCode::Char(c @ '1'..='7') => StackAction::from_menu_number(c as u8 - b'0')?,
        KeyCode::Char('0') | KeyCode::Esc => return Some(MenuCommand::Quit),

        KeyCode::Enter | KeyCode::Char('v') | KeyCode::Char('V') => StackAction::Show,
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => StackAction::Play,
        KeyCode::Char('r') | KeyCode::Char('R') => StackAction::Reserve,
        KeyCode::Char('u') | KeyCode::Char('U') => StackAction::UseReserved,
        KeyCode::Char('s') | KeyCode::Char('S') => StackAction::Swap,
        KeyCode::Char('z') | KeyCode::Char('Z') | KeyCode::Backspace => StackAction::Undo,
        KeyCode::Char('i') | KeyCode::Char('I') => StackAction::Invert,

        _ => return None,
    };
    Some(MenuCommand::Action(action))
}

/// Check if key should quit the simulator.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
