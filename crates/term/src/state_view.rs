//! StateView: maps a `SessionSnapshot` into styled text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::engine::{Outcome, SessionSnapshot};
use crate::style::{piece_color, Line, Rgb, SpanStyle};
use crate::types::{Piece, StackAction, StackError, QUEUE_CAPACITY, STACK_CAPACITY};

const HEADER: SpanStyle = SpanStyle::fg(Rgb::new(200, 200, 200)).bold();
const MUTED: SpanStyle = SpanStyle::fg(Rgb::new(140, 140, 140)).dim();
const GOOD: SpanStyle = SpanStyle::fg(Rgb::new(120, 220, 120));
const SOFT: SpanStyle = SpanStyle::fg(Rgb::new(240, 200, 80));
const BAD: SpanStyle = SpanStyle::fg(Rgb::new(230, 90, 90)).bold();

/// Last operation result shown above the state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Ok(String),
    Warning(String),
    Error(String),
}

impl StatusLine {
    pub fn from_result(result: &Result<Outcome, StackError>) -> Self {
        match result {
            Ok(outcome) => match outcome.warning() {
                Some(_) => StatusLine::Warning(outcome.to_string()),
                None => StatusLine::Ok(outcome.to_string()),
            },
            Err(err) => StatusLine::Error(format!("Error: {err}.")),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            StatusLine::Ok(s) | StatusLine::Warning(s) | StatusLine::Error(s) => s,
        }
    }

    fn style(&self) -> SpanStyle {
        match self {
            StatusLine::Ok(_) => GOOD,
            StatusLine::Warning(_) => SOFT,
            StatusLine::Error(_) => BAD,
        }
    }
}

/// Text renderer for the session state and menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateView {
    show_menu: bool,
    show_keys: bool,
}

impl Default for StateView {
    fn default() -> Self {
        Self {
            show_menu: true,
            show_keys: false,
        }
    }
}

impl StateView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_menu(mut self, show_menu: bool) -> Self {
        self.show_menu = show_menu;
        self
    }

    /// Show the interactive mnemonic keys next to the menu entries.
    pub fn with_keys(mut self, show_keys: bool) -> Self {
        self.show_keys = show_keys;
        self
    }

    /// Full screen: status, queue, stack, then the menu.
    pub fn render(&self, snap: &SessionSnapshot, status: Option<&StatusLine>) -> Vec<Line> {
        let mut out = Vec::with_capacity(24);
        if let Some(status) = status {
            out.push(Line::styled(status.text(), status.style()));
        }
        self.render_state_into(snap, &mut out);
        if self.show_menu {
            out.push(Line::new());
            self.render_menu_into(&mut out);
        }
        out
    }

    /// Queue (front→tail, positions 1..n) and stack (top→bottom with index).
    pub fn render_state_into(&self, snap: &SessionSnapshot, out: &mut Vec<Line>) {
        out.push(Line::new());
        out.push(Line::styled(
            format!("--- QUEUE (front -> tail) (cap {QUEUE_CAPACITY}) ---"),
            HEADER,
        ));
        if snap.queue.is_empty() {
            out.push(Line::styled("  (empty)", MUTED));
        }
        for (pos, piece) in snap.queue_positions() {
            out.push(piece_line(format!("  Pos {pos}: "), piece));
        }

        out.push(Line::new());
        out.push(Line::styled(
            format!("--- STACK (top) (cap {STACK_CAPACITY}) ---"),
            HEADER,
        ));
        if snap.stack.is_empty() {
            out.push(Line::styled("  (empty)", MUTED));
        }
        for &(idx, piece) in &snap.stack {
            out.push(piece_line(format!("  [{idx}] "), piece));
        }

        let undo = snap.pending_undo.map_or("none", |a| a.as_str());
        out.push(Line::styled(
            format!("  next id: {}  undo: {undo}", snap.next_id),
            MUTED,
        ));
    }

    pub fn render_menu_into(&self, out: &mut Vec<Line>) {
        out.push(Line::styled("--- MENU ---", HEADER));
        for action in StackAction::ALL {
            let mut line = format!("{} - {}", action.menu_number(), action.label());
            if self.show_keys {
                line.push_str(&format!(" [{}]", mnemonic(action)));
            }
            out.push(Line::plain(line));
        }
        out.push(Line::plain(if self.show_keys {
            "0 - Quit [q]"
        } else {
            "0 - Quit"
        }));
    }
}

fn piece_line(prefix: String, piece: Piece) -> Line {
    Line::plain(prefix)
        .push(
            piece.kind.as_str(),
            SpanStyle::fg(piece_color(piece.kind)).bold(),
        )
        .push(format!(" (id:{})", piece.id), SpanStyle::default())
}

fn mnemonic(action: StackAction) -> char {
    match action {
        StackAction::Show => 'v',
        StackAction::Play => 'p',
        StackAction::Reserve => 'r',
        StackAction::UseReserved => 'u',
        StackAction::Swap => 's',
        StackAction::Undo => 'z',
        StackAction::Invert => 'i',
    }
}
