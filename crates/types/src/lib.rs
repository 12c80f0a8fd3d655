//! Core types module - shared data structures and constants
//!
//! This crate defines the plain data types shared by every other crate in the
//! workspace: piece kinds, colors, the abstract input [`Command`] and the
//! construction-time [`GameConfig`]. Nothing in here performs I/O beyond
//! reading environment variables in [`GameConfig::from_env`].
//!
//! # Board Dimensions
//!
//! The classic playfield used by default:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 18 rows (indexed 0-17, row 0 at the top)
//! - **Spawn anchor**: (3, 0), the top-center of the board
//!
//! # Gravity
//!
//! The gravity interval shrinks as the score grows:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_DROP_MS` | 800 | Interval at score 0 |
//! | `SPEEDUP_STEP_MS` | 50 | Removed per `SPEEDUP_EVERY_POINTS` |
//! | `SPEEDUP_EVERY_POINTS` | 1000 | Score increment per step |
//! | `MIN_DROP_MS` | 100 | Floor |
//!
//! # Examples
//!
//! ```
//! use term_tetris_types::{Command, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};
//!
//! assert_eq!(Command::from_str("quickDrop"), Some(Command::QuickDrop));
//!
//! assert_eq!(DEFAULT_BOARD_WIDTH, 10);
//! assert_eq!(DEFAULT_BOARD_HEIGHT, 18);
//! ```

pub mod config;

pub use config::GameConfig;

/// Default board width in cells
pub const DEFAULT_BOARD_WIDTH: i32 = 10;

/// Default board height in cells
pub const DEFAULT_BOARD_HEIGHT: i32 = 18;

/// Smallest board edge accepted from configuration
pub const MIN_BOARD_EDGE: i32 = 4;

/// Largest board edge accepted from configuration
pub const MAX_BOARD_EDGE: i32 = 100;

/// Gravity interval at score 0
pub const INITIAL_DROP_MS: u64 = 800;

/// Gravity interval floor
pub const MIN_DROP_MS: u64 = 100;

/// Milliseconds removed from the gravity interval per speedup step
pub const SPEEDUP_STEP_MS: u64 = 50;

/// Points needed for one speedup step
pub const SPEEDUP_EVERY_POINTS: u32 = 1000;

/// Points for a single cleared row; doubled for every additional row
pub const SINGLE_ROW_POINTS: u32 = 100;

/// Cells per piece in this ruleset
pub const CELLS_PER_PIECE: usize = 4;

/// The seven piece kinds
///
/// - **O**: 2x2 square
/// - **Z**: `##` over ` ##`
/// - **S**: ` ##` over `##` (mirror of Z)
/// - **T**: `###` over ` #`
/// - **L**: `###` over `#`
/// - **J**: `###` over `  #` (mirror of L)
/// - **I**: four in a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    Z,
    S,
    T,
    L,
    J,
    I,
}

/// Color tag of a settled or falling cell.
///
/// An empty cell has no color; board queries return `Option<Color>` and use
/// `None` as the background sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Yellow,
    Red,
    Green,
    Magenta,
    White,
    Blue,
    Cyan,
}

/// Abstract user command (the event alphabet of the game loop)
///
/// Produced by an input source; gravity produces [`Command::MoveDown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down; anchors it when it cannot move
    MoveDown,
    /// Advance to the next rotation variant
    Rotate,
    /// Fall to the lowest legal row and anchor
    QuickDrop,
    /// Toggle pause
    Pause,
    /// Leave the game loop
    Quit,
    /// Repaint only
    Redraw,
}

impl Command {
    /// Parse a command name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use term_tetris_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("ROTATE"), Some(Command::Rotate));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" | "left" => Some(Command::MoveLeft),
            "moveright" | "right" => Some(Command::MoveRight),
            "movedown" | "down" => Some(Command::MoveDown),
            "rotate" => Some(Command::Rotate),
            "quickdrop" | "drop" => Some(Command::QuickDrop),
            "pause" => Some(Command::Pause),
            "quit" => Some(Command::Quit),
            "redraw" => Some(Command::Redraw),
            _ => None,
        }
    }

    /// camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::MoveDown => "moveDown",
            Command::Rotate => "rotate",
            Command::QuickDrop => "quickDrop",
            Command::Pause => "pause",
            Command::Quit => "quit",
            Command::Redraw => "redraw",
        }
    }
}
