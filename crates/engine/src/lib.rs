//! Event loop for the falling-block engine.
//!
//! The core crate decides *what* each command does; this crate decides
//! *when* commands happen. It merges two event sources into one ordered
//! stream:
//!
//! - an [`InputSource`], read on its own thread and forwarded through a
//!   bounded queue (events queue, they are never dropped)
//! - the [`Gravity`] timer, which produces `MoveDown` on every interval
//!
//! After each event a [`RenderSink`] is asked to draw. Line clears pause
//! gravity while the cleared rows flash, then gravity resumes at the interval
//! for the new score.
//!
//! # Example
//!
//! ```
//! use term_tetris_core::{Game, Snapshot};
//! use term_tetris_engine::{run, LoopConfig, RenderSink, ScriptedInput};
//! use term_tetris_types::GameConfig;
//!
//! struct Nowhere;
//!
//! impl RenderSink for Nowhere {
//!     fn render(&mut self, _: &Snapshot<'_>) -> anyhow::Result<()> { Ok(()) }
//!     fn announce_game_over(&mut self, _: &Snapshot<'_>) -> anyhow::Result<()> { Ok(()) }
//! }
//!
//! let rt = tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap();
//! let game = Game::new(GameConfig::default(), 7);
//! let input = ScriptedInput::parse("left left drop quit");
//! let summary = rt.block_on(run(game, input, Nowhere, LoopConfig::instant())).unwrap();
//! assert!(!summary.game_over());
//! ```

pub mod config;
pub mod event_loop;
pub mod gravity;
pub mod ports;
pub mod pump;
pub mod script;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use config::LoopConfig;
pub use event_loop::{run, RunSummary};
pub use gravity::Gravity;
pub use ports::{InputSource, RenderSink};
pub use pump::spawn_input_pump;
pub use script::ScriptedInput;
