//! Observation records - JSON output of the `--json` line mode
//!
//! One record per processed input line, serialised on a single line:
//!
//! ```text
//! {"seq":1,"action":"play","ok":true,"message":"You played T (id:1). New piece queued: O (id:6).",
//!  "warning":null,"error":null,"queue":[{"kind":"I","id":2},...],"stack":[],"next_id":7,"undo":"play"}
//! ```
//!
//! `seq` 0 is the initial state; each later line increments it.

use serde::{Deserialize, Serialize};

use crate::engine::{Outcome, SessionSnapshot};
use crate::types::{Piece, PieceKind, StackError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKindUpper {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl From<PieceKind> for PieceKindUpper {
    fn from(value: PieceKind) -> Self {
        match value {
            PieceKind::I => Self::I,
            PieceKind::O => Self::O,
            PieceKind::T => Self::T,
            PieceKind::L => Self::L,
            PieceKind::J => Self::J,
            PieceKind::S => Self::S,
            PieceKind::Z => Self::Z,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRecord {
    pub kind: PieceKindUpper,
    pub id: u64,
}

impl From<Piece> for PieceRecord {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind.into(),
            id: value.id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackEntryRecord {
    pub index: usize,
    pub kind: PieceKindUpper,
    pub id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorRecord {
    pub code: String,
    pub message: String,
}

impl From<&StackError> for ErrorRecord {
    fn from(value: &StackError) -> Self {
        Self {
            code: value.code().to_string(),
            message: value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationRecord {
    pub seq: u64,
    /// camelCase action name; `null` for the initial record and invalid input.
    pub action: Option<String>,
    pub ok: bool,
    pub message: String,
    pub warning: Option<ErrorRecord>,
    pub error: Option<ErrorRecord>,
    /// Front→tail.
    pub queue: Vec<PieceRecord>,
    /// Top→bottom.
    pub stack: Vec<StackEntryRecord>,
    pub next_id: u64,
    pub undo: Option<String>,
}

impl ObservationRecord {
    fn with_state(seq: u64, snap: &SessionSnapshot) -> Self {
        Self {
            seq,
            action: None,
            ok: true,
            message: String::new(),
            warning: None,
            error: None,
            queue: snap.queue.iter().copied().map(PieceRecord::from).collect(),
            stack: snap
                .stack
                .iter()
                .map(|&(index, piece)| StackEntryRecord {
                    index,
                    kind: piece.kind.into(),
                    id: piece.id,
                })
                .collect(),
            next_id: snap.next_id,
            undo: snap.pending_undo.map(|a| a.as_str().to_string()),
        }
    }

    /// Record for the state before any input.
    pub fn initial(snap: &SessionSnapshot) -> Self {
        let mut rec = Self::with_state(0, snap);
        rec.message = "Session started.".to_string();
        rec
    }

    /// Record for the result of one operation.
    pub fn from_result(
        seq: u64,
        action: crate::types::StackAction,
        result: &Result<Outcome, StackError>,
        snap: &SessionSnapshot,
    ) -> Self {
        let mut rec = Self::with_state(seq, snap);
        rec.action = Some(action.as_str().to_string());
        match result {
            Ok(outcome) => {
                rec.message = outcome.to_string();
                rec.warning = outcome.warning().as_ref().map(ErrorRecord::from);
            }
            Err(err) => {
                rec.ok = false;
                rec.message = err.to_string();
                rec.error = Some(ErrorRecord::from(err));
            }
        }
        rec
    }

    /// Record for a line that did not parse as a menu choice.
    pub fn invalid_input(seq: u64, message: String, snap: &SessionSnapshot) -> Self {
        let mut rec = Self::with_state(seq, snap);
        rec.ok = false;
        rec.error = Some(ErrorRecord {
            code: "invalid_input".to_string(),
            message: message.clone(),
        });
        rec.message = message;
        rec
    }
}
