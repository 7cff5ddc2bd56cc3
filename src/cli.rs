//! Command-line argument parsing.

use anyhow::{anyhow, Result};

use crate::config::{AppConfig, Mode};

pub const USAGE: &str = "\
Usage: tetris-stack [OPTIONS]

Options:
  --seed <N>     RNG seed (overrides TETRIS_STACK_SEED)
  --plain        line mode: one menu choice per line, text output
  --json         line mode: one menu choice per line, JSON output
  --log <PATH>   append logs to PATH (overrides TETRIS_STACK_LOG_PATH)
  -h, --help     print this help

Menu: 1 show, 2 play, 3 reserve, 4 use reserved, 5 swap, 6 undo, 7 invert, 0 quit
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Run(AppConfig),
    Help,
}

/// Apply `args` (program name already stripped) on top of `base`.
pub fn parse_args(args: &[String], base: AppConfig) -> Result<CliCommand> {
    let mut config = base;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(CliCommand::Help),
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            "--log" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --log"))?;
                config.log_path = Some(v.clone());
            }
            "--plain" => set_mode(&mut config, Mode::Plain)?,
            "--json" => set_mode(&mut config, Mode::Json)?,
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(CliCommand::Run(config))
}

fn set_mode(config: &mut AppConfig, mode: Mode) -> Result<()> {
    match config.mode {
        Some(existing) if existing != mode => {
            Err(anyhow!("--plain and --json are mutually exclusive"))
        }
        _ => {
            config.mode = Some(mode);
            Ok(())
        }
    }
}
