//! Board module - settled cells plus the falling piece
//!
//! The grid is stored as a flat row-major array of `Option<Color>`.
//! Coordinates: (x, y) with x in `0..width` (left to right) and y in
//! `0..height` (top to bottom).
//!
//! Every motion of the active piece follows the same pattern: apply it, ask
//! [`Board::current_piece_in_collision`], and undo it if the answer is yes.
//! The piece is therefore never observed in an illegal placement.

use crate::geometry::Vector;
use crate::pieces::{ActivePiece, PieceShape};
use crate::types::{Color, GameConfig, MAX_BOARD_EDGE};

/// A settled cell; `None` is empty
pub type Cell = Option<Color>;

/// The game board
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: i32,
    height: i32,
    /// Row-major (y * width + x)
    cells: Vec<Cell>,
    current: Option<ActivePiece>,
}

impl Board {
    /// Create a new empty board with no active piece. Each edge is clamped to
    /// `1..=MAX_BOARD_EDGE`.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.clamp(1, MAX_BOARD_EDGE);
        let height = height.clamp(1, MAX_BOARD_EDGE);
        Self {
            width,
            height,
            cells: vec![None; (width * height) as usize],
            current: None,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.width, config.height)
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(Vector::new(x, y)) {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, p: Vector) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Settled cell at (x, y); `None` if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set a settled cell. Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    fn is_settled(&self, p: Vector) -> bool {
        matches!(self.get(p.x, p.y), Some(Some(_)))
    }

    /// True when no cell is settled
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn current(&self) -> Option<&ActivePiece> {
        self.current.as_ref()
    }

    /// Replace the active piece with `shape` in its first variant, placed at
    /// `anchor` plus the shape's spawn offset. The placement is not checked.
    pub fn spawn(&mut self, shape: &'static PieceShape, anchor: Vector) {
        self.current = Some(ActivePiece::new(shape, anchor.plus(shape.spawn_offset)));
    }

    /// Whether the active piece leaves the grid or overlaps a settled cell.
    ///
    /// This is the single legality test for moves, rotations and spawns.
    pub fn current_piece_in_collision(&self) -> bool {
        let Some(piece) = &self.current else {
            return false;
        };
        piece
            .cells()
            .any(|p| !self.in_bounds(p) || self.is_settled(p))
    }

    /// Moves the active piece if the destination is legal.
    /// Returns whether the move happened; on failure nothing changes.
    pub fn move_if_possible(&mut self, translation: Vector) -> bool {
        let Some(piece) = self.current.as_mut() else {
            return false;
        };
        let position = piece.position;
        piece.position = position.plus(translation);
        if self.current_piece_in_collision() {
            if let Some(piece) = self.current.as_mut() {
                piece.position = position;
            }
            return false;
        }
        true
    }

    /// Rotates the active piece in place if the new variant fits. No kicks.
    pub fn rotate_if_possible(&mut self) -> bool {
        let Some(piece) = self.current.as_mut() else {
            return false;
        };
        piece.rotate();
        if self.current_piece_in_collision() {
            if let Some(piece) = self.current.as_mut() {
                piece.unrotate();
            }
            return false;
        }
        true
    }

    /// Commits the active piece into the settled cells and removes it
    pub fn merge_current_piece(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };
        let color = piece.color();
        for p in piece.cells() {
            self.set(p.x, p.y, Some(color));
        }
    }

    /// Check whether a row is completely filled
    pub fn row_complete(&self, y: i32) -> bool {
        if y < 0 || y >= self.height {
            return false;
        }
        let start = (y * self.width) as usize;
        let end = start + self.width as usize;
        self.cells[start..end].iter().all(Option::is_some)
    }

    /// Complete rows, top to bottom. Does not modify the board.
    pub fn cleared_rows(&self) -> Vec<i32> {
        (0..self.height).filter(|&y| self.row_complete(y)).collect()
    }

    /// Remove row `y`, shifting every row above it down by one and blanking
    /// row 0.
    pub fn collapse_row(&mut self, y: i32) {
        if y < 0 || y >= self.height {
            return;
        }
        let width = self.width as usize;

        for row in (1..=y as usize).rev() {
            let src = (row - 1) * width;
            self.cells.copy_within(src..src + width, row * width);
        }
        self.cells[..width].fill(None);
    }

    /// Clear every complete row, scanning from the bottom up. A row index is
    /// collapsed repeatedly while it stays complete, so stacked complete rows
    /// are all removed. Returns the number of rows removed.
    pub fn clear_rows(&mut self) -> usize {
        let mut removed = 0;
        let mut y = self.height - 1;
        while y >= 0 {
            while self.row_complete(y) {
                self.collapse_row(y);
                removed += 1;
            }
            y -= 1;
        }
        removed
    }

    /// Color shown at `position`: the settled color, else the active piece's
    /// color if it covers the cell, else `None`.
    pub fn cell_color(&self, position: Vector) -> Option<Color> {
        if let Some(Some(color)) = self.get(position.x, position.y) {
            return Some(color);
        }
        let piece = self.current.as_ref()?;
        piece
            .cells()
            .any(|p| p == position)
            .then(|| piece.color())
    }

    /// Flat view of the settled cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Settled cells of one row
    pub fn row(&self, y: i32) -> &[Cell] {
        if y < 0 || y >= self.height {
            return &[];
        }
        let start = (y * self.width) as usize;
        &self.cells[start..start + self.width as usize]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
