//! Tetris Stack (workspace facade crate).
//!
//! The container, engine, input and terminal code live in dedicated crates
//! under `crates/`; this package re-exports them as
//! `tetris_stack::{core,engine,input,term,types}` and adds the binary-facing
//! pieces: configuration, argument parsing, logging, JSON observation
//! records, and the line-mode runner.

pub use tetris_stack_core as core;
pub use tetris_stack_engine as engine;
pub use tetris_stack_input as input;
pub use tetris_stack_term as term;
pub use tetris_stack_types as types;

pub mod cli;
pub mod config;
pub mod logging;
pub mod report;
pub mod runner;
