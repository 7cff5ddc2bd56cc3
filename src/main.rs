//! Tetris Stack console runner (default binary).
//!
//! Interactive mode uses crossterm raw mode with single-key menu selection;
//! `--plain` and `--json` (or a non-TTY stdin) switch to the line runner.

use std::io::{self, IsTerminal};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tetris_stack::cli::{parse_args, CliCommand, USAGE};
use tetris_stack::config::{AppConfig, Mode};
use tetris_stack::engine::Session;
use tetris_stack::input::{handle_key_event, MenuCommand};
use tetris_stack::logging;
use tetris_stack::runner::{run_lines, LineFormat};
use tetris_stack::term::{StateView, StatusLine, TerminalRenderer};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args, AppConfig::from_env()?)? {
        CliCommand::Help => {
            print!("{USAGE}");
            return Ok(());
        }
        CliCommand::Run(config) => config,
    };

    let mode = config.resolve_mode(io::stdin().is_terminal());
    logging::init(&config, mode)?;

    let mut session = Session::with_seed(config.seed);
    match mode {
        Mode::Interactive => {
            let mut term = TerminalRenderer::new();
            term.enter()?;

            let result = run(&mut term, &mut session);

            // Always try to restore terminal state.
            let _ = term.exit();
            result
        }
        Mode::Plain => run_lines(
            &mut session,
            io::stdin().lock(),
            &mut io::stdout().lock(),
            LineFormat::Text,
        ),
        Mode::Json => run_lines(
            &mut session,
            io::stdin().lock(),
            &mut io::stdout().lock(),
            LineFormat::Json,
        ),
    }
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = StateView::new().with_keys(true);
    let mut status = StatusLine::Ok(format!(
        "Tetris Stack - seed {}. Pick an option.",
        session.generator().seed()
    ));

    loop {
        term.draw(&view.render(&session.snapshot(), Some(&status)))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match handle_key_event(key) {
            Some(MenuCommand::Quit) => return Ok(()),
            Some(MenuCommand::Action(action)) => {
                status = StatusLine::from_result(&session.apply(action));
            }
            None => {
                status = StatusLine::Error("Invalid option, try again.".to_string());
            }
        }
    }
}
