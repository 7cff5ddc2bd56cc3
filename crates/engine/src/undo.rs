//! Undo manager - reverts the single pending [`UndoRecord`]
//!
//! The record is consumed whether or not the revert succeeds. A revert that
//! cannot complete puts back whatever it already moved and reports
//! `UndoRecoveryFailed`.
//!
//! Replenishment pieces are taken back off the tail without checking their
//! identity against the record; with a single pending record nothing else can
//! have touched the tail in between.

use crate::core::{PieceQueue, ReserveStack, UndoRecord};
use crate::outcome::Outcome;
use crate::types::{StackAction, StackError};

fn recovery(action: StackAction, reason: &'static str) -> StackError {
    StackError::UndoRecoveryFailed { action, reason }
}

/// Revert `record` against the current queue and stack.
pub fn revert(
    queue: &mut PieceQueue,
    stack: &mut ReserveStack,
    record: UndoRecord,
) -> Result<Outcome, StackError> {
    let action = record.action();
    match record {
        UndoRecord::Play { piece, replenished } => {
            let removed = match replenished {
                Some(_) => Some(
                    queue
                        .dequeue_tail()
                        .ok_or_else(|| recovery(action, "queue has no tail to remove"))?,
                ),
                None => None,
            };
            if !queue.enqueue_front(piece) {
                if let Some(tail) = removed {
                    queue.enqueue_tail(tail);
                }
                return Err(recovery(action, "could not put the piece back at the front"));
            }
            Ok(Outcome::Undone {
                action,
                restored: Some(piece),
                removed,
            })
        }

        UndoRecord::Reserve { replenished, .. } => {
            let top = stack
                .pop()
                .ok_or_else(|| recovery(action, "stack empty"))?;
            // Free the tail slot first so the front insert has room.
            let removed = match replenished {
                Some(_) => queue.dequeue_tail(),
                None => None,
            };
            if !queue.enqueue_front(top) {
                if let Some(tail) = removed {
                    queue.enqueue_tail(tail);
                }
                stack.push(top);
                return Err(recovery(action, "could not put the piece back in the queue"));
            }
            Ok(Outcome::Undone {
                action,
                restored: Some(top),
                removed,
            })
        }

        UndoRecord::UseReserved { piece, replenished } => {
            let removed = match replenished {
                Some(_) => Some(
                    queue
                        .dequeue_tail()
                        .ok_or_else(|| recovery(action, "no new piece to remove"))?,
                ),
                None => None,
            };
            if !stack.push(piece) {
                if let Some(tail) = removed {
                    queue.enqueue_tail(tail);
                }
                return Err(recovery(action, "stack full"));
            }
            Ok(Outcome::Undone {
                action,
                restored: Some(piece),
                removed,
            })
        }

        UndoRecord::Swap {
            queue_piece,
            stack_piece,
        } => {
            if queue.is_empty() || stack.is_empty() {
                return Err(recovery(action, "queue or stack empty"));
            }
            queue.replace_front(queue_piece);
            stack.replace_top(stack_piece);
            Ok(Outcome::Undone {
                action,
                restored: Some(queue_piece),
                removed: None,
            })
        }

        UndoRecord::Invert => {
            queue.reverse();
            stack.reverse();
            Ok(Outcome::Undone {
                action,
                restored: None,
                removed: None,
            })
        }
    }
}
