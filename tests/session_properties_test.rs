//! Session behaviour tests - capacities, ids, and undo round-trips

use std::collections::HashSet;

use tetris_stack::core::SimpleRng;
use tetris_stack::engine::{Outcome, Session};
use tetris_stack::types::{
    Piece, StackAction, StackError, Structure, QUEUE_CAPACITY, STACK_CAPACITY,
};

fn queue_ids(s: &Session) -> Vec<u64> {
    s.queue().iter().map(|p| p.id).collect()
}

fn stack_ids(s: &Session) -> Vec<u64> {
    s.snapshot().stack.iter().map(|(_, p)| p.id).collect()
}

#[test]
fn test_new_session_full_queue_empty_stack() {
    for seed in [1, 2, 999, u32::MAX] {
        let s = Session::with_seed(seed);
        assert_eq!(s.queue().len(), QUEUE_CAPACITY);
        assert!(s.stack().is_empty());
        assert!(s.pending_undo().is_none());
        assert_eq!(queue_ids(&s), vec![1, 2, 3, 4, 5]);
    }
}

#[test]
fn test_random_sequences_respect_capacities_and_unique_ids() {
    let mut rng = SimpleRng::new(4242);
    for seed in 1..=20 {
        let mut s = Session::with_seed(seed);
        let mut last_generated = 5u64;

        for _ in 0..300 {
            let action = StackAction::ALL[rng.next_range(StackAction::ALL.len() as u32) as usize];
            let result = s.apply(action);

            if let Ok(
                Outcome::Played { replenished, .. }
                | Outcome::Reserved { replenished, .. }
                | Outcome::UsedReserved { replenished, .. },
            ) = result
            {
                if let Some(p) = replenished {
                    assert!(p.id > last_generated, "ids must strictly increase");
                    last_generated = p.id;
                }
            }

            assert!(s.queue().len() <= QUEUE_CAPACITY);
            assert!(s.stack().len() <= STACK_CAPACITY);

            let snap = s.snapshot();
            let mut seen = HashSet::new();
            for p in snap.queue.iter().chain(snap.stack.iter().map(|(_, p)| p)) {
                assert!(seen.insert(p.id), "duplicate id {} in {:?}", p.id, snap);
                assert!(p.id < snap.next_id);
            }
        }
    }
}

#[test]
fn test_play_then_undo_restores_queue_and_keeps_counter() {
    let mut s = Session::with_seed(7);
    let before = queue_ids(&s);

    let outcome = s.play().unwrap();
    let Outcome::Played {
        piece,
        replenished: Some(fresh),
    } = outcome
    else {
        panic!("unexpected outcome {outcome:?}");
    };
    assert_eq!(piece.id, 1);
    assert_eq!(fresh.id, 6);
    let next_after_play = s.generator().next_id();

    s.undo().unwrap();
    assert_eq!(queue_ids(&s), before);
    assert_eq!(s.generator().next_id(), next_after_play);

    // The discarded id 6 is never handed out again.
    let Outcome::Played {
        replenished: Some(again),
        ..
    } = s.play().unwrap()
    else {
        panic!("expected replenishment");
    };
    assert_eq!(again.id, 7);
}

#[test]
fn test_reserve_then_undo_restores_both() {
    let mut s = Session::with_seed(11);
    s.reserve().unwrap();
    s.play().unwrap();

    let q_before = queue_ids(&s);
    let s_before = stack_ids(&s);

    s.reserve().unwrap();
    assert_eq!(s.stack().len(), 2);
    assert_eq!(s.queue().len(), QUEUE_CAPACITY);

    let undone = s.undo().unwrap();
    assert!(matches!(
        undone,
        Outcome::Undone {
            action: StackAction::Reserve,
            ..
        }
    ));
    assert_eq!(queue_ids(&s), q_before);
    assert_eq!(stack_ids(&s), s_before);
}

#[test]
fn test_use_reserved_then_undo_restores_both() {
    let mut s = Session::with_seed(12);
    s.reserve().unwrap();
    s.reserve().unwrap();
    let q_before = queue_ids(&s);
    let s_before = stack_ids(&s);

    s.use_reserved().unwrap();
    assert_eq!(s.stack().len(), 1);
    s.undo().unwrap();

    assert_eq!(queue_ids(&s), q_before);
    assert_eq!(stack_ids(&s), s_before);
}

#[test]
fn test_invert_is_self_inverse() {
    let mut s = Session::with_seed(13);
    s.reserve().unwrap();
    s.reserve().unwrap();
    s.reserve().unwrap();
    let q_before = queue_ids(&s);
    let s_before = stack_ids(&s);

    s.invert().unwrap();
    let mut q_rev = q_before.clone();
    q_rev.reverse();
    let mut s_rev = s_before.clone();
    s_rev.reverse();
    assert_eq!(queue_ids(&s), q_rev);
    assert_eq!(stack_ids(&s), s_rev);

    s.invert().unwrap();
    assert_eq!(queue_ids(&s), q_before);
    assert_eq!(stack_ids(&s), s_before);

    s.invert().unwrap();
    s.undo().unwrap();
    assert_eq!(queue_ids(&s), q_before);
    assert_eq!(stack_ids(&s), s_before);
}

#[test]
fn test_swap_and_undo() {
    let mut s = Session::with_seed(14);
    // Stack (bottom→top) = [1, 2, 3]; queue = [4, 5, 6, 7, 8].
    for _ in 0..3 {
        s.reserve().unwrap();
    }
    assert_eq!(queue_ids(&s), vec![4, 5, 6, 7, 8]);
    assert_eq!(stack_ids(&s), vec![3, 2, 1]);

    s.swap().unwrap();
    assert_eq!(queue_ids(&s), vec![3, 5, 6, 7, 8]);
    assert_eq!(stack_ids(&s), vec![4, 2, 1]);

    s.undo().unwrap();
    assert_eq!(queue_ids(&s), vec![4, 5, 6, 7, 8]);
    assert_eq!(stack_ids(&s), vec![3, 2, 1]);
}

#[test]
fn test_undo_twice_reports_nothing_to_undo() {
    let mut s = Session::with_seed(15);
    assert_eq!(s.undo(), Err(StackError::NothingToUndo));

    s.play().unwrap();
    assert!(s.undo().is_ok());
    assert_eq!(s.undo(), Err(StackError::NothingToUndo));
    assert_eq!(s.apply(StackAction::Undo), Err(StackError::NothingToUndo));
}

#[test]
fn test_reserve_on_full_stack_changes_nothing() {
    let mut s = Session::with_seed(16);
    for _ in 0..STACK_CAPACITY {
        s.reserve().unwrap();
    }
    let before = s.snapshot();

    assert_eq!(
        s.reserve(),
        Err(StackError::StructureFull(Structure::Stack))
    );
    assert_eq!(s.snapshot(), before);
}

#[test]
fn test_use_reserved_on_empty_stack() {
    let mut s = Session::with_seed(17);
    let before = s.snapshot();
    assert_eq!(
        s.use_reserved(),
        Err(StackError::StructureEmpty(Structure::Stack))
    );
    assert_eq!(s.snapshot(), before);
}

#[test]
fn test_swap_never_replenishes() {
    let mut s = Session::with_seed(18);
    s.reserve().unwrap();
    let next = s.generator().next_id();
    s.swap().unwrap();
    assert_eq!(s.generator().next_id(), next);
}

#[test]
fn test_pieces_move_by_value() {
    let mut s = Session::with_seed(19);
    let front: Piece = s.queue().front().unwrap();
    s.reserve().unwrap();
    assert_eq!(s.stack().top(), Some(front));
    assert!(s.queue().iter().all(|p| p.id != front.id));
}
