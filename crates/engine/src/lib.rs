//! Piece-supply engine - actions, undo, and the session that owns them
//!
//! [`Session`] is the entry point: it starts with a full queue and an empty
//! stack, and exposes the seven caller operations (show, play, reserve,
//! use-reserved, swap, undo, invert). Every operation returns
//! `Result<Outcome, StackError>`; nothing panics and every failure is
//! recoverable.
//!
//! # Example
//!
//! ```
//! use tetris_stack_engine::Session;
//! use tetris_stack_types::{StackAction, StackError};
//!
//! let mut session = Session::with_seed(12345);
//! let before = session.snapshot();
//!
//! session.apply(StackAction::Reserve).unwrap();
//! assert_eq!(session.stack().len(), 1);
//!
//! session.apply(StackAction::Undo).unwrap();
//! assert_eq!(session.snapshot().queue, before.queue);
//! assert_eq!(session.apply(StackAction::Undo), Err(StackError::NothingToUndo));
//! ```

pub mod actions;
pub mod outcome;
pub mod session;
pub mod snapshot;
pub mod undo;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use outcome::Outcome;
pub use session::Session;
pub use snapshot::SessionSnapshot;
