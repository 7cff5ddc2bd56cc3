//! Queue module - the "next pieces" circular buffer
//!
//! A fixed five-slot ring with a `front` index and a `count`. Normal play only
//! dequeues at the front and enqueues at the tail; undo additionally needs to
//! take the tail back and push a piece back in at the front, so both ends are
//! exposed. Everything is O(1) and allocation-free.

use arrayvec::ArrayVec;

use crate::types::{Piece, QUEUE_CAPACITY};

/// Fixed-capacity circular queue of pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue {
    slots: [Option<Piece>; QUEUE_CAPACITY],
    front: usize,
    count: usize,
}

impl PieceQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            slots: [None; QUEUE_CAPACITY],
            front: 0,
            count: 0,
        }
    }

    /// Physical slot of the `offset`-th logical element (0 = front)
    #[inline(always)]
    fn index(&self, offset: usize) -> usize {
        (self.front + offset) % QUEUE_CAPACITY
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == QUEUE_CAPACITY
    }

    /// Append at the tail. Returns false (and leaves the queue alone) when full.
    pub fn enqueue_tail(&mut self, piece: Piece) -> bool {
        if self.is_full() {
            return false;
        }
        let tail = self.index(self.count);
        self.slots[tail] = Some(piece);
        self.count += 1;
        true
    }

    /// Remove and return the front piece.
    pub fn dequeue_front(&mut self) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }
        let piece = self.slots[self.front].take();
        self.front = (self.front + 1) % QUEUE_CAPACITY;
        self.count -= 1;
        piece
    }

    /// Remove and return the tail piece (undo only). The front index is untouched.
    pub fn dequeue_tail(&mut self) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }
        let tail = self.index(self.count - 1);
        self.count -= 1;
        self.slots[tail].take()
    }

    /// Put a piece back in as the new front (undo only). Returns false when full.
    pub fn enqueue_front(&mut self, piece: Piece) -> bool {
        if self.is_full() {
            return false;
        }
        self.front = (self.front + QUEUE_CAPACITY - 1) % QUEUE_CAPACITY;
        self.slots[self.front] = Some(piece);
        self.count += 1;
        true
    }

    /// Peek at the front piece
    pub fn front(&self) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front]
    }

    /// Peek at the tail piece
    pub fn tail(&self) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.index(self.count - 1)]
    }

    /// Overwrite the front piece in place, returning the previous one.
    ///
    /// Returns None (and writes nothing) when the queue is empty.
    pub fn replace_front(&mut self, piece: Piece) -> Option<Piece> {
        if self.is_empty() {
            return None;
        }
        self.slots[self.front].replace(piece)
    }

    /// Reverse the logical front→tail order in place.
    pub fn reverse(&mut self) {
        for i in 0..self.count / 2 {
            let a = self.index(i);
            let b = self.index(self.count - 1 - i);
            self.slots.swap(a, b);
        }
    }

    /// Iterate pieces front→tail
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        (0..self.count).filter_map(move |i| self.slots[self.index(i)])
    }

    /// Pieces ordered front→tail.
    ///
    /// This is stack-only and does not allocate.
    pub fn snapshot(&self) -> ArrayVec<Piece, QUEUE_CAPACITY> {
        self.iter().collect()
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new()
    }
}
