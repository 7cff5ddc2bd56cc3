//! Line-mode runner tests (plain text and JSON)

use std::io::Cursor;

use tetris_stack::engine::Session;
use tetris_stack::report::ObservationRecord;
use tetris_stack::runner::{run_lines, LineFormat, BANNER, FAREWELL};

fn run(input: &str, format: LineFormat) -> (Session, String) {
    let mut session = Session::with_seed(12345);
    let mut out = Vec::new();
    run_lines(&mut session, Cursor::new(input.as_bytes()), &mut out, format).unwrap();
    (session, String::from_utf8(out).unwrap())
}

fn records(output: &str) -> Vec<ObservationRecord> {
    output
        .lines()
        .map(|l| serde_json::from_str(l).expect("each line is one JSON record"))
        .collect()
}

#[test]
fn test_plain_mode_prints_state_and_messages() {
    let (session, out) = run("1\n2\n3\n", LineFormat::Text);

    assert!(out.starts_with(BANNER));
    assert!(out.contains("--- QUEUE (front -> tail) (cap 5) ---"));
    assert!(out.contains("--- STACK (top) (cap 3) ---"));
    assert!(out.contains("Current state."));
    assert!(out.contains("You played"));
    assert!(out.contains("Reserved"));
    assert!(out.contains("  [0] "));
    assert!(out.trim_end().ends_with(FAREWELL));
    assert_eq!(session.stack().len(), 1);
}

#[test]
fn test_plain_mode_invalid_input_continues() {
    let (session, out) = run("abc\n\n42\n2\n", LineFormat::Text);
    assert_eq!(out.matches("Invalid choice, try again.").count(), 2);
    assert!(out.contains("You played"));
    assert_eq!(session.generator().next_id(), 7);
}

#[test]
fn test_plain_mode_use_reserved_reports_full_queue_once() {
    let (_session, out) = run("3\n4\n0\n", LineFormat::Text);
    let line = out
        .lines()
        .find(|l| l.contains("You used reserved piece"))
        .expect("use reserved message");
    assert!(line.ends_with("Queue full, no new piece queued."), "{line}");
    assert_eq!(out.matches("no new piece queued").count(), 1);
}

#[test]
fn test_quit_stops_processing() {
    let (session, _out) = run("2\n0\n2\n2\n", LineFormat::Text);
    // Only the first play ran.
    assert_eq!(session.generator().next_id(), 7);
}

#[test]
fn test_plain_mode_reports_errors() {
    let (_session, out) = run("6\n4\n5\n", LineFormat::Text);
    assert!(out.contains("Error: nothing to undo."));
    assert!(out.contains("Error: stack empty."));
}

#[test]
fn test_json_mode_one_record_per_line() {
    let (_session, out) = run("reserve\n5\n6\n6\nbogus\n", LineFormat::Json);
    let recs = records(&out);
    assert_eq!(recs.len(), 6);

    assert_eq!(recs[0].seq, 0);
    assert_eq!(recs[0].action, None);
    assert_eq!(recs[0].queue.len(), 5);

    assert_eq!(recs[1].action.as_deref(), Some("reserve"));
    assert!(recs[1].ok);
    assert_eq!(recs[1].stack.len(), 1);
    assert_eq!(recs[1].stack[0].id, 1);
    assert_eq!(recs[1].undo.as_deref(), Some("reserve"));

    // Swap: front (id 2) and top (id 1) exchange.
    assert_eq!(recs[2].action.as_deref(), Some("swap"));
    assert_eq!(recs[2].queue[0].id, 1);
    assert_eq!(recs[2].stack[0].id, 2);

    // Undo restores, then a second undo has nothing left.
    assert!(recs[3].ok);
    assert_eq!(recs[3].queue[0].id, 2);
    assert_eq!(recs[3].undo, None);
    assert!(!recs[4].ok);
    assert_eq!(
        recs[4].error.as_ref().map(|e| e.code.as_str()),
        Some("nothing_to_undo")
    );

    assert!(!recs[5].ok);
    assert_eq!(recs[5].seq, 5);
    assert_eq!(
        recs[5].error.as_ref().map(|e| e.code.as_str()),
        Some("invalid_input")
    );
}

#[test]
fn test_json_mode_use_reserved_warns_on_full_queue() {
    let (_session, out) = run("3\n4\n", LineFormat::Json);
    let recs = records(&out);
    let used = &recs[2];
    assert!(used.ok);
    assert_eq!(
        used.warning.as_ref().map(|w| w.code.as_str()),
        Some("replenish_failed")
    );
    assert!(used.stack.is_empty());
    assert_eq!(used.queue.len(), 5);
}

#[test]
fn test_json_same_seed_is_reproducible() {
    let (_a, out_a) = run("2\n3\n7\n2\n", LineFormat::Json);
    let (_b, out_b) = run("2\n3\n7\n2\n", LineFormat::Json);
    assert_eq!(out_a, out_b);
}
