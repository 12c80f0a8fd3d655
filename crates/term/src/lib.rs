//! Terminal front end for the falling-block engine.
//!
//! No widget toolkit: a [`GameView`] lays each snapshot out on a plain
//! [`FrameBuffer`] at two terminal columns per board cell, and a
//! [`TerminalRenderer`] flushes only the cells that changed.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sink;

pub use term_tetris_core as core;
pub use term_tetris_engine as engine;
pub use term_tetris_types as types;

pub use fb::{piece_rgb, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Layout, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sink::TerminalSink;
