//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule. It has no dependencies on terminals,
//! timers or threads, so the same seed always replays the same game.
//!
//! # Module Structure
//!
//! - [`geometry`]: integer vectors
//! - [`pieces`]: the seven shapes with authored rotation tables
//! - [`board`]: settled cells, collision, merging and row clearing
//! - [`scoring`]: row-clear points and the gravity curve
//! - [`rng`]: seeded uniform piece selection
//! - [`game_state`]: the command-driven state machine
//! - [`snapshot`]: borrowed per-frame view for renderers
//!
//! # Game Rules
//!
//! One fixed, classic ruleset:
//!
//! - **Uniform randomizer**: every piece is drawn independently from all seven
//! - **Stored rotations**: rotation cycles through authored variants, no wall kicks
//! - **Anchoring**: a piece commits only when a downward move fails
//! - **Scoring**: 100 × 2^(rows − 1) per anchor that clears rows
//! - **Gravity**: 800ms at score 0, 50ms faster per 1000 points, floor 100ms
//!
//! # Example
//!
//! ```
//! use term_tetris_core::{Game, Step};
//! use term_tetris_types::{Command, GameConfig};
//!
//! let mut game = Game::new(GameConfig::default(), 12345);
//!
//! game.handle(Command::MoveRight);
//! game.handle(Command::Rotate);
//! let step = game.handle(Command::QuickDrop);
//!
//! assert!(matches!(step, Step::Anchored(_)));
//! assert!(!game.is_over());
//! ```

pub mod board;
pub mod game_state;
pub mod geometry;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use term_tetris_types as types;

pub use board::{Board, Cell};
pub use game_state::{AnchorReport, ClearedRows, Game, Phase, Step};
pub use geometry::Vector;
pub use pieces::{all_shapes, shape_of, ActivePiece, PieceShape, Variant};
pub use rng::SimpleRng;
pub use scoring::{drop_delay, line_clear_points};
pub use snapshot::Snapshot;
