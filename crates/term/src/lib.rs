//! Terminal rendering for the piece-supply simulator.
//!
//! Split in two: [`state_view`] turns a session snapshot into styled lines
//! without doing any I/O, and [`renderer`] writes those lines to the terminal
//! through crossterm.

pub mod renderer;
pub mod state_view;
pub mod style;

pub use tetris_stack_engine as engine;
pub use tetris_stack_types as types;

pub use renderer::{encode_lines_into, TerminalRenderer};
pub use state_view::{StateView, StatusLine};
pub use style::{piece_color, Line, Rgb, Span, SpanStyle};
