//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the piece-supply
//! simulator. They are plain data with no I/O, usable from the core containers,
//! the action engine, the terminal view, and the JSON observation layer alike.
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Pieces held in the "next" queue |
//! | `STACK_CAPACITY` | 3 | Pieces held in the reserve stack |
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{Piece, PieceKind, StackAction, QUEUE_CAPACITY, STACK_CAPACITY};
//!
//! // Pieces print as kind plus id
//! assert_eq!(Piece::new(PieceKind::J, 12).to_string(), "J (id:12)");
//!
//! // Parse an action name
//! assert_eq!(StackAction::from_str("useReserved"), Some(StackAction::UseReserved));
//!
//! assert_eq!(QUEUE_CAPACITY, 5);
//! assert_eq!(STACK_CAPACITY, 3);
//! ```

use std::fmt;

/// Capacity of the "next pieces" queue.
pub const QUEUE_CAPACITY: usize = 5;

/// Capacity of the reserve stack.
pub const STACK_CAPACITY: usize = 3;

/// Number of distinct piece kinds.
pub const PIECE_KIND_COUNT: usize = 7;

/// The seven tetromino piece kinds
///
/// Ordering of [`PieceKind::ALL`] is the order pieces are drawn from by index:
/// I, O, T, L, J, S, Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, in generator index order.
    pub const ALL: [PieceKind; PIECE_KIND_COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Kind at generator index `idx` (wraps modulo 7).
    pub fn from_index(idx: usize) -> Self {
        Self::ALL[idx % PIECE_KIND_COUNT]
    }

    /// Single uppercase letter, as shown to the player.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated piece: its kind plus a session-unique id.
///
/// Ids start at 1 and are never reused, even when an undo discards the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u64,
}

impl Piece {
    pub fn new(kind: PieceKind, id: u64) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id:{})", self.kind, self.id)
    }
}

/// Caller-invokable session operations
///
/// These are used by the interactive menu, the plain line mode and the
/// JSON mode alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackAction {
    /// Show queue and stack without changing anything
    Show,
    /// Dequeue the front piece and play it
    Play,
    /// Move the front piece onto the reserve stack
    Reserve,
    /// Consume the top of the reserve stack
    UseReserved,
    /// Exchange queue front with stack top
    Swap,
    /// Revert the last action
    Undo,
    /// Reverse queue and stack order
    Invert,
}

impl StackAction {
    /// Menu numbering used by the console front-end (0 is quit, not an action).
    pub fn menu_number(&self) -> u8 {
        match self {
            StackAction::Show => 1,
            StackAction::Play => 2,
            StackAction::Reserve => 3,
            StackAction::UseReserved => 4,
            StackAction::Swap => 5,
            StackAction::Undo => 6,
            StackAction::Invert => 7,
        }
    }

    pub fn from_menu_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(StackAction::Show),
            2 => Some(StackAction::Play),
            3 => Some(StackAction::Reserve),
            4 => Some(StackAction::UseReserved),
            5 => Some(StackAction::Swap),
            6 => Some(StackAction::Undo),
            7 => Some(StackAction::Invert),
            _ => None,
        }
    }

    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::StackAction;
    ///
    /// assert_eq!(StackAction::from_str("play"), Some(StackAction::Play));
    /// assert_eq!(StackAction::from_str("INVERT"), Some(StackAction::Invert));
    /// assert_eq!(StackAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "show" => Some(StackAction::Show),
            "play" => Some(StackAction::Play),
            "reserve" => Some(StackAction::Reserve),
            "usereserved" => Some(StackAction::UseReserved),
            "swap" => Some(StackAction::Swap),
            "undo" => Some(StackAction::Undo),
            "invert" => Some(StackAction::Invert),
            _ => None,
        }
    }

    /// camelCase name, used in JSON observation records
    pub fn as_str(&self) -> &'static str {
        match self {
            StackAction::Show => "show",
            StackAction::Play => "play",
            StackAction::Reserve => "reserve",
            StackAction::UseReserved => "useReserved",
            StackAction::Swap => "swap",
            StackAction::Undo => "undo",
            StackAction::Invert => "invert",
        }
    }

    /// Short menu label.
    pub fn label(&self) -> &'static str {
        match self {
            StackAction::Show => "Show queue and stack",
            StackAction::Play => "Play a piece (dequeue)",
            StackAction::Reserve => "Reserve a piece (push)",
            StackAction::UseReserved => "Use reserved piece (pop)",
            StackAction::Swap => "Swap stack top with queue front",
            StackAction::Undo => "Undo last action",
            StackAction::Invert => "Invert queue and stack",
        }
    }

    /// All actions in menu order.
    pub const ALL: [StackAction; 7] = [
        StackAction::Show,
        StackAction::Play,
        StackAction::Reserve,
        StackAction::UseReserved,
        StackAction::Swap,
        StackAction::Undo,
        StackAction::Invert,
    ];
}

/// Which container an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structure {
    Queue,
    Stack,
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Structure::Queue => f.write_str("queue"),
            Structure::Stack => f.write_str("stack"),
        }
    }
}

/// Recoverable failures reported by session operations.
///
/// None of these are fatal; callers present the message and carry on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    #[error("{0} full")]
    StructureFull(Structure),

    #[error("{0} empty")]
    StructureEmpty(Structure),

    #[error("nothing to undo")]
    NothingToUndo,

    /// Soft: the action itself succeeded but no replacement piece was queued.
    #[error("queue full, no new piece queued")]
    ReplenishFailed,

    #[error("could not undo {action}: {reason}")]
    UndoRecoveryFailed {
        action: StackAction,
        reason: &'static str,
    },
}

impl StackError {
    /// Stable snake_case code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            StackError::StructureFull(_) => "structure_full",
            StackError::StructureEmpty(_) => "structure_empty",
            StackError::NothingToUndo => "nothing_to_undo",
            StackError::ReplenishFailed => "replenish_failed",
            StackError::UndoRecoveryFailed { .. } => "undo_recovery_failed",
        }
    }
}

impl fmt::Display for StackAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
