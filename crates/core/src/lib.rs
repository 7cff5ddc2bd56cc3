//! Core containers - pure, deterministic, and testable
//!
//! This crate holds the data structures the piece supply is built from. It has
//! **zero dependencies** on terminal, logging, or I/O:
//!
//! - **Deterministic**: a fixed seed reproduces the same piece sequence
//! - **Fixed-capacity**: queue and stack are arrays with checked index arithmetic
//! - **Allocation-free**: snapshots are `ArrayVec`s
//!
//! # Module Structure
//!
//! - [`rng`]: LCG and the [`PieceGenerator`] that owns the piece id counter
//! - [`queue`]: five-slot circular [`PieceQueue`] with both-ends access for undo
//! - [`stack`]: three-slot [`ReserveStack`]
//! - [`undo`]: [`UndoRecord`], the data needed to revert the last action
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::{PieceGenerator, PieceQueue};
//!
//! let mut gen = PieceGenerator::new(12345);
//! let mut queue = PieceQueue::new();
//! while !queue.is_full() {
//!     queue.enqueue_tail(gen.generate());
//! }
//!
//! assert_eq!(queue.front().map(|p| p.id), Some(1));
//! assert_eq!(gen.next_id(), 6);
//! ```

pub mod queue;
pub mod rng;
pub mod stack;
pub mod undo;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use queue::PieceQueue;
pub use rng::{PieceGenerator, SimpleRng};
pub use stack::ReserveStack;
pub use undo::UndoRecord;
