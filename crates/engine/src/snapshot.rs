use arrayvec::ArrayVec;

use crate::types::{Piece, StackAction, QUEUE_CAPACITY, STACK_CAPACITY};

/// A read-only copy of the session, for display and observation records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Front→tail.
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    /// Top→bottom, each with its stack slot index.
    pub stack: ArrayVec<(usize, Piece), STACK_CAPACITY>,
    pub next_id: u64,
    pub seed: u32,
    /// Action the pending undo record would revert.
    pub pending_undo: Option<StackAction>,
}

impl SessionSnapshot {
    /// Queue entries as (1-based position, piece).
    pub fn queue_positions(&self) -> impl Iterator<Item = (usize, Piece)> + '_ {
        self.queue.iter().enumerate().map(|(i, p)| (i + 1, *p))
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self {
            queue: ArrayVec::new(),
            stack: ArrayVec::new(),
            next_id: 1,
            seed: 0,
            pending_undo: None,
        }
    }
}
