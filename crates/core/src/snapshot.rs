use std::time::Duration;

use crate::board::Board;
use crate::pieces::PieceShape;

/// Everything a render sink needs for one frame.
///
/// Borrowed and `Copy`; the sink reads cells through [`Board::cell_color`].
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub board: &'a Board,
    pub next: &'static PieceShape,
    pub score: u32,
    pub drop_delay: Duration,
    pub paused: bool,
    pub game_over: bool,
    /// Rows highlighted by the line-clear animation
    pub flashing: &'a [i32],
}

impl<'a> Snapshot<'a> {
    /// Same frame with a different board and highlighted rows
    pub fn with_flash(self, board: &'a Board, rows: &'a [i32]) -> Self {
        Self {
            board,
            flashing: rows,
            ..self
        }
    }

    pub fn is_flashing(&self, y: i32) -> bool {
        self.flashing.contains(&y)
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}
