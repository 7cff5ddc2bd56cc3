//! Stack module - the reserve stack
//!
//! Three slots, LIFO. Slot 0 is the bottom; the top is `len - 1`.

use arrayvec::ArrayVec;

use crate::types::{Piece, STACK_CAPACITY};

/// Fixed-capacity LIFO of reserved pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveStack {
    slots: [Option<Piece>; STACK_CAPACITY],
    len: usize,
}

impl ReserveStack {
    pub fn new() -> Self {
        Self {
            slots: [None; STACK_CAPACITY],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == STACK_CAPACITY
    }

    /// Push onto the top. Returns false when full.
    pub fn push(&mut self, piece: Piece) -> bool {
        if self.is_full() {
            return false;
        }
        self.slots[self.len] = Some(piece);
        self.len += 1;
        true
    }

    pub fn pop(&mut self) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }
        self.len -= 1;
        self.slots[self.len].take()
    }

    pub fn top(&self) -> Option<Piece> {
        self.len.checked_sub(1).and_then(|top| self.slots[top])
    }

    /// Overwrite the top piece in place, returning the previous one.
    pub fn replace_top(&mut self, piece: Piece) -> Option<Piece> {
        let top = self.len.checked_sub(1)?;
        self.slots[top].replace(piece)
    }

    /// Reverse bottom→top order in place.
    pub fn reverse(&mut self) {
        self.slots[..self.len].reverse();
    }

    /// Pieces ordered top→bottom, each with its slot index (top has index `len - 1`).
    pub fn snapshot(&self) -> ArrayVec<(usize, Piece), STACK_CAPACITY> {
        (0..self.len)
            .rev()
            .filter_map(|i| self.slots[i].map(|piece| (i, piece)))
            .collect()
    }
}

impl Default for ReserveStack {
    fn default() -> Self {
        Self::new()
    }
}
