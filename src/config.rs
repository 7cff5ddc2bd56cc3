//! Runtime configuration.
//!
//! Read from the environment first; command-line flags (see [`crate::cli`])
//! override individual fields afterwards.
//!
//! - `TETRIS_STACK_SEED`: RNG seed (u32). Defaults to a clock-derived value
//!   when unset or blank; anything else that is not a u32 is an error.
//! - `TETRIS_STACK_LOG_PATH`: append tracing output to this file.
//! - `TETRIS_STACK_LOG`: tracing filter directive (default `warn`).

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

/// How the console front-end talks to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Raw-mode terminal, single-key menu.
    Interactive,
    /// One menu choice per input line, text output.
    Plain,
    /// One menu choice per input line, one JSON observation per output line.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u32,
    /// Forced mode; `None` picks interactive on a TTY and plain otherwise.
    pub mode: Option<Mode>,
    pub log_path: Option<String>,
    pub log_filter: String,
}

pub const DEFAULT_LOG_FILTER: &str = "warn";

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 1,
            mode: None,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source (tests pass a closure).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let seed = match lookup("TETRIS_STACK_SEED") {
            Some(s) if !s.trim().is_empty() => s
                .trim()
                .parse::<u32>()
                .map_err(|_| anyhow!("invalid TETRIS_STACK_SEED value: {}", s))?,
            _ => clock_seed(),
        };

        let log_path = lookup("TETRIS_STACK_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_filter = lookup("TETRIS_STACK_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            seed,
            mode: None,
            log_path,
            log_filter,
        })
    }

    pub fn resolve_mode(&self, stdin_is_terminal: bool) -> Mode {
        match self.mode {
            Some(mode) => mode,
            None if stdin_is_terminal => Mode::Interactive,
            None => Mode::Plain,
        }
    }
}

/// Seed from the wall clock, never zero.
pub fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);
    let folded = (nanos ^ (nanos >> 32)) as u32;
    folded.max(1)
}
