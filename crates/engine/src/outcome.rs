//! Outcome of a successful session operation.

use std::fmt;

use crate::types::{Piece, StackAction, StackError};

/// What an operation did, in enough detail to describe it to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Shown,
    Played {
        piece: Piece,
        replenished: Option<Piece>,
    },
    Reserved {
        piece: Piece,
        replenished: Option<Piece>,
    },
    UsedReserved {
        piece: Piece,
        replenished: Option<Piece>,
    },
    /// Values after the exchange.
    Swapped {
        queue_front: Piece,
        stack_top: Piece,
    },
    Inverted,
    Undone {
        action: StackAction,
        /// Piece put back where it came from (front, stack).
        restored: Option<Piece>,
        /// Replenishment piece taken back off the queue tail.
        removed: Option<Piece>,
    },
}

impl Outcome {
    /// The operation that produced this outcome.
    pub fn action(&self) -> StackAction {
        match self {
            Outcome::Shown => StackAction::Show,
            Outcome::Played { .. } => StackAction::Play,
            Outcome::Reserved { .. } => StackAction::Reserve,
            Outcome::UsedReserved { .. } => StackAction::UseReserved,
            Outcome::Swapped { .. } => StackAction::Swap,
            Outcome::Inverted => StackAction::Invert,
            Outcome::Undone { .. } => StackAction::Undo,
        }
    }

    /// Soft failure attached to an otherwise successful action.
    pub fn warning(&self) -> Option<StackError> {
        match self {
            Outcome::Played { replenished, .. }
            | Outcome::Reserved { replenished, .. }
            | Outcome::UsedReserved { replenished, .. }
                if replenished.is_none() =>
            {
                Some(StackError::ReplenishFailed)
            }
            _ => None,
        }
    }
}

fn write_replenished(f: &mut fmt::Formatter<'_>, replenished: Option<Piece>) -> fmt::Result {
    match replenished {
        Some(p) => write!(f, " New piece queued: {p}."),
        None => f.write_str(" Queue full, no new piece queued."),
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Outcome::Shown => f.write_str("Current state."),
            Outcome::Played { piece, replenished } => {
                write!(f, "You played {piece}.")?;
                write_replenished(f, replenished)
            }
            Outcome::Reserved { piece, replenished } => {
                write!(f, "Reserved {piece}.")?;
                write_replenished(f, replenished)
            }
            Outcome::UsedReserved { piece, replenished } => {
                write!(f, "You used reserved piece {piece}.")?;
                write_replenished(f, replenished)
            }
            Outcome::Swapped {
                queue_front,
                stack_top,
            } => write!(
                f,
                "Swap done. New front: {queue_front}. New top: {stack_top}."
            ),
            Outcome::Inverted => f.write_str("Queue and stack inverted."),
            Outcome::Undone {
                action,
                restored,
                removed,
            } => {
                write!(f, "Undid {action}.")?;
                if let Some(p) = restored {
                    write!(f, " Restored {p}.")?;
                }
                if let Some(p) = removed {
                    write!(f, " Removed {p}.")?;
                }
                Ok(())
            }
        }
    }
}
