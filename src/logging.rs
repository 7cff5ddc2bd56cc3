//! Tracing setup.
//!
//! Logs go to the configured file when there is one. Without a file they go
//! to stderr, except in interactive mode where the terminal belongs to the UI
//! and logging stays off.

use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, Mode};

/// Build the subscriber for `config`, or `None` when logging stays off.
pub fn build_subscriber(
    config: &AppConfig,
    mode: Mode,
) -> Result<Option<Box<dyn Subscriber + Send + Sync>>> {
    let filter = EnvFilter::try_new(&config.log_filter)
        .map_err(|e| anyhow!("invalid log filter {:?}: {}", config.log_filter, e))?;

    if let Some(path) = config.log_path.as_deref() {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("open log file {path}"))?;
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        return Ok(Some(Box::new(subscriber)));
    }

    if mode == Mode::Interactive {
        return Ok(None);
    }

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .finish();
    Ok(Some(Box::new(subscriber)))
}

/// Install the global subscriber.
pub fn init(config: &AppConfig, mode: Mode) -> Result<()> {
    if let Some(subscriber) = build_subscriber(config, mode)? {
        tracing::subscriber::set_global_default(subscriber)
            .map_err(|e| anyhow!("logging already initialised: {}", e))?;
    }
    Ok(())
}
