//! Terminal input.
//!
//! Maps `crossterm` events onto [`crate::types::Command`] and provides
//! [`TerminalInput`], the blocking input source the game loop reads from on
//! its own thread.

pub mod map;
pub mod source;

pub use term_tetris_engine as engine;
pub use term_tetris_types as types;

pub use map::{handle_key_event, map_event, should_quit};
pub use source::TerminalInput;
