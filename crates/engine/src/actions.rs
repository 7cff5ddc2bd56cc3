//! Action engine - the five state-changing operations
//!
//! Each operation validates its preconditions first; a rejected operation
//! changes nothing and produces no undo record. A successful one returns the
//! [`Outcome`] together with the [`UndoRecord`] that reverts it.
//!
//! Play, Reserve and UseReserved refill the queue from the generator so it
//! stays at capacity. Refilling is best-effort: if the queue is already full
//! the action still succeeds and the outcome carries a `ReplenishFailed`
//! warning. UseReserved leaves the queue untouched, so during a normal
//! session its refill always lands in that case. Swap never refills.

use crate::core::{PieceGenerator, PieceQueue, ReserveStack, UndoRecord};
use crate::outcome::Outcome;
use crate::types::{Piece, StackError, Structure};

pub type ActionResult = Result<(Outcome, UndoRecord), StackError>;

/// Generate one piece and append it to the queue tail.
fn replenish(queue: &mut PieceQueue, generator: &mut PieceGenerator) -> Option<Piece> {
    let piece = generator.generate();
    if queue.enqueue_tail(piece) {
        Some(piece)
    } else {
        // The id is spent either way.
        None
    }
}

/// Dequeue the front piece and play it.
pub fn play(queue: &mut PieceQueue, generator: &mut PieceGenerator) -> ActionResult {
    let piece = queue
        .dequeue_front()
        .ok_or(StackError::StructureEmpty(Structure::Queue))?;
    let replenished = replenish(queue, generator);

    Ok((
        Outcome::Played { piece, replenished },
        UndoRecord::Play { piece, replenished },
    ))
}

/// Move the front piece onto the reserve stack.
pub fn reserve(
    queue: &mut PieceQueue,
    stack: &mut ReserveStack,
    generator: &mut PieceGenerator,
) -> ActionResult {
    if stack.is_full() {
        return Err(StackError::StructureFull(Structure::Stack));
    }
    let piece = queue
        .dequeue_front()
        .ok_or(StackError::StructureEmpty(Structure::Queue))?;
    // Fullness was checked above.
    stack.push(piece);
    let replenished = replenish(queue, generator);

    Ok((
        Outcome::Reserved { piece, replenished },
        UndoRecord::Reserve { piece, replenished },
    ))
}

/// Consume the top reserved piece. Always refills the queue.
pub fn use_reserved(
    queue: &mut PieceQueue,
    stack: &mut ReserveStack,
    generator: &mut PieceGenerator,
) -> ActionResult {
    let piece = stack
        .pop()
        .ok_or(StackError::StructureEmpty(Structure::Stack))?;
    let replenished = replenish(queue, generator);

    Ok((
        Outcome::UsedReserved { piece, replenished },
        UndoRecord::UseReserved { piece, replenished },
    ))
}

/// Exchange queue front and stack top in place.
pub fn swap(queue: &mut PieceQueue, stack: &mut ReserveStack) -> ActionResult {
    let stack_piece = stack
        .top()
        .ok_or(StackError::StructureEmpty(Structure::Stack))?;
    let queue_piece = queue
        .front()
        .ok_or(StackError::StructureEmpty(Structure::Queue))?;

    queue.replace_front(stack_piece);
    stack.replace_top(queue_piece);

    Ok((
        Outcome::Swapped {
            queue_front: stack_piece,
            stack_top: queue_piece,
        },
        UndoRecord::Swap {
            queue_piece,
            stack_piece,
        },
    ))
}

/// Reverse the queue and the stack. Never fails.
pub fn invert(queue: &mut PieceQueue, stack: &mut ReserveStack) -> ActionResult {
    queue.reverse();
    stack.reverse();
    Ok((Outcome::Inverted, UndoRecord::Invert))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn filled(seed: u32) -> (PieceQueue, ReserveStack, PieceGenerator) {
        let mut gen = PieceGenerator::new(seed);
        let mut queue = PieceQueue::new();
        while !queue.is_full() {
            queue.enqueue_tail(gen.generate());
        }
        (queue, ReserveStack::new(), gen)
    }

    #[test]
    fn play_refills_queue() {
        let (mut q, _s, mut gen) = filled(1);
        let front = q.front().unwrap();

        let (outcome, record) = play(&mut q, &mut gen).unwrap();
        assert!(q.is_full());
        assert_eq!(q.tail().map(|p| p.id), Some(6));
        assert_eq!(
            outcome,
            Outcome::Played {
                piece: front,
                replenished: q.tail()
            }
        );
        assert_eq!(record.action(), crate::types::StackAction::Play);
    }

    #[test]
    fn play_on_empty_queue_is_rejected() {
        let mut q = PieceQueue::new();
        let mut gen = PieceGenerator::new(1);
        assert_eq!(
            play(&mut q, &mut gen).unwrap_err(),
            StackError::StructureEmpty(Structure::Queue)
        );
        // No id consumed.
        assert_eq!(gen.next_id(), 1);
    }

    #[test]
    fn reserve_checks_stack_before_queue() {
        let mut q = PieceQueue::new();
        let mut s = ReserveStack::new();
        let mut gen = PieceGenerator::new(1);
        for id in 100..103 {
            s.push(Piece::new(PieceKind::O, id));
        }
        assert_eq!(
            reserve(&mut q, &mut s, &mut gen).unwrap_err(),
            StackError::StructureFull(Structure::Stack)
        );

        s.pop();
        assert_eq!(
            reserve(&mut q, &mut s, &mut gen).unwrap_err(),
            StackError::StructureEmpty(Structure::Queue)
        );
    }

    #[test]
    fn reserve_moves_front_onto_stack_and_refills() {
        let (mut q, mut s, mut gen) = filled(2);
        let front = q.front().unwrap();

        let (outcome, record) = reserve(&mut q, &mut s, &mut gen).unwrap();
        assert_eq!(s.top(), Some(front));
        assert_eq!(s.len(), 1);
        assert!(q.is_full());
        assert!(q.iter().all(|p| p.id != front.id));
        assert_eq!(outcome.warning(), None);
        assert_eq!(
            record,
            UndoRecord::Reserve {
                piece: front,
                replenished: q.tail()
            }
        );
    }

    #[test]
    fn use_reserved_refills_even_when_queue_short() {
        let mut q = PieceQueue::new();
        let mut s = ReserveStack::new();
        let mut gen = PieceGenerator::new(3);
        s.push(Piece::new(PieceKind::J, 50));

        let (outcome, _) = use_reserved(&mut q, &mut s, &mut gen).unwrap();
        assert_eq!(q.len(), 1);
        assert!(s.is_empty());
        assert_eq!(outcome.warning(), None);
    }

    #[test]
    fn use_reserved_with_full_queue_warns() {
        let (mut q, mut s, mut gen) = filled(4);
        s.push(Piece::new(PieceKind::J, 50));

        let (outcome, record) = use_reserved(&mut q, &mut s, &mut gen).unwrap();
        assert_eq!(outcome.warning(), Some(StackError::ReplenishFailed));
        assert_eq!(record.replenished(), None);
        assert_eq!(q.len(), 5);
        // The dropped piece still burned an id.
        assert_eq!(gen.next_id(), 7);
    }

    #[test]
    fn swap_requires_both() {
        let (mut q, mut s, _gen) = filled(5);
        assert_eq!(
            swap(&mut q, &mut s).unwrap_err(),
            StackError::StructureEmpty(Structure::Stack)
        );

        let mut empty_q = PieceQueue::new();
        s.push(Piece::new(PieceKind::L, 77));
        assert_eq!(
            swap(&mut empty_q, &mut s).unwrap_err(),
            StackError::StructureEmpty(Structure::Queue)
        );
    }

    #[test]
    fn invert_on_empty_structures_succeeds() {
        let mut q = PieceQueue::new();
        let mut s = ReserveStack::new();
        let (outcome, record) = invert(&mut q, &mut s).unwrap();
        assert_eq!(outcome, Outcome::Inverted);
        assert_eq!(record, UndoRecord::Invert);
    }
}
