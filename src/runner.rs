//! Line-oriented front-ends (plain text and JSON).
//!
//! Both read one menu choice per input line until `0`/`quit` or EOF. They
//! are generic over reader/writer so tests can drive them with byte buffers.

use std::io::{BufRead, Write};

use anyhow::Result;

use crate::engine::Session;
use crate::input::{parse_choice, ChoiceError, MenuCommand};
use crate::report::ObservationRecord;
use crate::term::{Line, StateView, StatusLine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFormat {
    Text,
    Json,
}

pub const BANNER: &str = "=== TETRIS STACK - queue, reserve stack and undo ===";
pub const FAREWELL: &str = "Leaving Tetris Stack. Bye!";

fn write_lines<W: Write>(out: &mut W, lines: &[Line]) -> Result<()> {
    for line in lines {
        writeln!(out, "{}", line.plain_text())?;
    }
    Ok(())
}

fn write_record<W: Write>(out: &mut W, record: &ObservationRecord) -> Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Drive `session` from `input` until quit or EOF.
pub fn run_lines<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    format: LineFormat,
) -> Result<()> {
    let view = StateView::new().with_menu(false);
    let menu = {
        let mut lines = Vec::new();
        view.render_menu_into(&mut lines);
        lines
    };

    match format {
        LineFormat::Text => {
            writeln!(out, "{BANNER}")?;
            write_lines(out, &menu)?;
            write!(out, "Choose an option: ")?;
        }
        LineFormat::Json => write_record(out, &ObservationRecord::initial(&session.snapshot()))?,
    }
    out.flush()?;

    let mut seq = 0u64;
    for line in input.lines() {
        let line = line?;
        let command = match parse_choice(&line) {
            Ok(command) => command,
            Err(ChoiceError::Empty) => continue,
            Err(err) => {
                seq += 1;
                match format {
                    LineFormat::Text => {
                        writeln!(out, "Invalid choice, try again.")?;
                        write!(out, "Choose an option: ")?;
                    }
                    LineFormat::Json => write_record(
                        out,
                        &ObservationRecord::invalid_input(seq, err.to_string(), &session.snapshot()),
                    )?,
                }
                out.flush()?;
                continue;
            }
        };

        let action = match command {
            MenuCommand::Quit => break,
            MenuCommand::Action(action) => action,
        };

        seq += 1;
        let result = session.apply(action);
        let snap = session.snapshot();
        match format {
            LineFormat::Text => {
                let status = StatusLine::from_result(&result);
                write_lines(out, &view.render(&snap, Some(&status)))?;
                writeln!(out)?;
                write_lines(out, &menu)?;
                write!(out, "Choose an option: ")?;
            }
            LineFormat::Json => {
                write_record(out, &ObservationRecord::from_result(seq, action, &result, &snap))?
            }
        }
        out.flush()?;
    }

    if format == LineFormat::Text {
        writeln!(out)?;
        writeln!(out, "{FAREWELL}")?;
        out.flush()?;
    }
    Ok(())
}
