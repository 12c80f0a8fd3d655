//! Terminal falling-block puzzle (workspace facade crate).
//!
//! Re-exports the crates under `crates/` so binaries, tests and benches can
//! use one `term_tetris::{core,engine,input,term,types}` path.

pub use term_tetris_core as core;
pub use term_tetris_engine as engine;
pub use term_tetris_input as input;
pub use term_tetris_term as term;
pub use term_tetris_types as types;
