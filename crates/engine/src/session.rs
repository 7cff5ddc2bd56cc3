//! Session module - owns the whole piece supply
//!
//! A session ties together the generator, the queue, the reserve stack and
//! the single pending undo record. Every operation goes through `&mut self`,
//! so the four always change together.

use tracing::{debug, info, warn};

use crate::actions::{self, ActionResult};
use crate::core::{PieceGenerator, PieceQueue, ReserveStack, UndoRecord};
use crate::outcome::Outcome;
use crate::snapshot::SessionSnapshot;
use crate::types::{StackAction, StackError};
use crate::undo;

#[derive(Debug, Clone)]
pub struct Session {
    queue: PieceQueue,
    stack: ReserveStack,
    generator: PieceGenerator,
    undo: Option<UndoRecord>,
}

impl Session {
    /// Start a session: queue filled to capacity, stack empty, nothing to undo.
    pub fn new(mut generator: PieceGenerator) -> Self {
        let mut queue = PieceQueue::new();
        while !queue.is_full() {
            queue.enqueue_tail(generator.generate());
        }
        info!(seed = generator.seed(), "session started");

        Self {
            queue,
            stack: ReserveStack::new(),
            generator,
            undo: None,
        }
    }

    pub fn with_seed(seed: u32) -> Self {
        Self::new(PieceGenerator::new(seed))
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn stack(&self) -> &ReserveStack {
        &self.stack
    }

    pub fn generator(&self) -> &PieceGenerator {
        &self.generator
    }

    pub fn pending_undo(&self) -> Option<&UndoRecord> {
        self.undo.as_ref()
    }

    /// Dispatch a caller action.
    pub fn apply(&mut self, action: StackAction) -> Result<Outcome, StackError> {
        match action {
            StackAction::Show => Ok(Outcome::Shown),
            StackAction::Play => self.play(),
            StackAction::Reserve => self.reserve(),
            StackAction::UseReserved => self.use_reserved(),
            StackAction::Swap => self.swap(),
            StackAction::Undo => self.undo(),
            StackAction::Invert => self.invert(),
        }
    }

    pub fn play(&mut self) -> Result<Outcome, StackError> {
        let result = actions::play(&mut self.queue, &mut self.generator);
        self.record(StackAction::Play, result)
    }

    pub fn reserve(&mut self) -> Result<Outcome, StackError> {
        let result = actions::reserve(&mut self.queue, &mut self.stack, &mut self.generator);
        self.record(StackAction::Reserve, result)
    }

    pub fn use_reserved(&mut self) -> Result<Outcome, StackError> {
        let result = actions::use_reserved(&mut self.queue, &mut self.stack, &mut self.generator);
        self.record(StackAction::UseReserved, result)
    }

    pub fn swap(&mut self) -> Result<Outcome, StackError> {
        let result = actions::swap(&mut self.queue, &mut self.stack);
        self.record(StackAction::Swap, result)
    }

    pub fn invert(&mut self) -> Result<Outcome, StackError> {
        let result = actions::invert(&mut self.queue, &mut self.stack);
        self.record(StackAction::Invert, result)
    }

    /// Revert the last action. The pending record is consumed even on failure.
    pub fn undo(&mut self) -> Result<Outcome, StackError> {
        let record = self.undo.take().ok_or(StackError::NothingToUndo)?;
        match undo::revert(&mut self.queue, &mut self.stack, record) {
            Ok(outcome) => {
                debug!(action = %record.action(), "undone");
                Ok(outcome)
            }
            Err(err) => {
                warn!(%err, "undo could not fully recover");
                Err(err)
            }
        }
    }

    /// Keep the undo record of a successful action; a rejected one leaves the
    /// previous record in place.
    fn record(&mut self, action: StackAction, result: ActionResult) -> Result<Outcome, StackError> {
        match result {
            Ok((outcome, record)) => {
                debug!(%action, queue = self.queue.len(), stack = self.stack.len(), "applied");
                if let Some(w) = outcome.warning() {
                    info!(%action, warning = %w, "no replenishment");
                }
                self.undo = Some(record);
                Ok(outcome)
            }
            Err(err) => {
                debug!(%action, %err, "rejected");
                Err(err)
            }
        }
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.queue = self.queue.snapshot();
        out.stack = self.stack.snapshot();
        out.next_id = self.generator.next_id();
        out.seed = self.generator.seed();
        out.pending_undo = self.undo.as_ref().map(UndoRecord::action);
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(PieceGenerator::default())
    }
}
