//! Undo record - what the last action needs to be reverted
//!
//! One variant per reversible action. The session keeps at most one of these
//! (`Option<UndoRecord>`); a fresh record replaces the old one after every
//! successful action.

use crate::types::{Piece, StackAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoRecord {
    /// Front piece was played; `replenished` is the piece appended afterwards.
    Play {
        piece: Piece,
        replenished: Option<Piece>,
    },
    /// Front piece moved onto the stack.
    Reserve {
        piece: Piece,
        replenished: Option<Piece>,
    },
    /// Top of the stack was consumed.
    UseReserved {
        piece: Piece,
        replenished: Option<Piece>,
    },
    /// Pre-swap queue front and stack top.
    Swap {
        queue_piece: Piece,
        stack_piece: Piece,
    },
    Invert,
}

impl UndoRecord {
    /// The action this record reverts.
    pub fn action(&self) -> StackAction {
        match self {
            UndoRecord::Play { .. } => StackAction::Play,
            UndoRecord::Reserve { .. } => StackAction::Reserve,
            UndoRecord::UseReserved { .. } => StackAction::UseReserved,
            UndoRecord::Swap { .. } => StackAction::Swap,
            UndoRecord::Invert => StackAction::Invert,
        }
    }

    /// Replenishment piece appended by the action, if any.
    pub fn replenished(&self) -> Option<Piece> {
        match self {
            UndoRecord::Play { replenished, .. }
            | UndoRecord::Reserve { replenished, .. }
            | UndoRecord::UseReserved { replenished, .. } => *replenished,
            UndoRecord::Swap { .. } | UndoRecord::Invert => None,
        }
    }
}
