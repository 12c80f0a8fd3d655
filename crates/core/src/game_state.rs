//! Game state module - the event/state machine
//!
//! Ties the board, the piece catalog, the RNG and scoring together. Each
//! [`Command`] is handled synchronously and completely; the caller (the event
//! loop) owns timing and redraws.

use std::time::Duration;

use log::{debug, info};

use crate::board::Board;
use crate::geometry::Vector;
use crate::pieces::{all_shapes, PieceShape};
use crate::rng::SimpleRng;
use crate::scoring::{drop_delay, line_clear_points};
use crate::snapshot::Snapshot;
use crate::types::{Command, GameConfig};

const LEFT: Vector = Vector::new(-1, 0);
const RIGHT: Vector = Vector::new(1, 0);
const DOWN: Vector = Vector::new(0, 1);

/// Lifecycle phase. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    GameOver,
}

/// Rows removed by one anchor, with the board as it looked just before they
/// collapsed (for the line-clear animation).
#[derive(Debug, Clone, PartialEq)]
pub struct ClearedRows {
    pub rows: Vec<i32>,
    pub board: Board,
}

/// What happened when a piece was anchored
#[derive(Debug, Clone, PartialEq)]
pub struct AnchorReport {
    pub points: u32,
    pub cleared: Option<ClearedRows>,
    /// The gravity interval changed because of the new score
    pub delay_changed: bool,
    /// The freshly spawned piece collided
    pub game_over: bool,
}

impl AnchorReport {
    pub fn rows_cleared(&self) -> usize {
        self.cleared.as_ref().map_or(0, |c| c.rows.len())
    }
}

/// Result of handling one command
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    /// State may have changed; redraw
    Continue,
    /// A piece was committed to the board
    Anchored(AnchorReport),
    /// Leave the loop
    Quit,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    board: Board,
    shapes: &'static [PieceShape],
    next: &'static PieceShape,
    rng: SimpleRng,
    score: u32,
    drop_delay: Duration,
    phase: Phase,
}

impl Game {
    /// New game on an empty board
    pub fn new(config: GameConfig, seed: u32) -> Self {
        Self::with_board(config, Board::from_config(&config), seed)
    }

    /// New game on a pre-filled board. The first piece spawns immediately and
    /// the game is over at once if it does not fit.
    pub fn with_board(config: GameConfig, board: Board, seed: u32) -> Self {
        let shapes = all_shapes();
        let mut rng = SimpleRng::new(seed);
        let first = rng.pick(shapes);
        let next = rng.pick(shapes);

        let mut game = Self {
            config,
            board,
            shapes,
            next,
            rng,
            score: 0,
            drop_delay: drop_delay(0, &config),
            phase: Phase::Running,
        };
        game.board.spawn(first, game.spawn_anchor());
        if game.board.current_piece_in_collision() {
            game.phase = Phase::GameOver;
        }
        game
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for hosts that stage positions (tests, benches).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn next_piece(&self) -> &'static PieceShape {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn drop_delay(&self) -> Duration {
        self.drop_delay
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn spawn_anchor(&self) -> Vector {
        Vector::from(self.config.spawn)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            board: &self.board,
            next: self.next,
            score: self.score,
            drop_delay: self.drop_delay,
            paused: self.is_paused(),
            game_over: self.is_over(),
            flashing: &[],
        }
    }

    /// Apply one command
    pub fn handle(&mut self, command: Command) -> Step {
        match (self.phase, command) {
            (_, Command::Quit) => Step::Quit,
            (Phase::GameOver, _) => Step::Continue,
            (_, Command::Pause) => {
                self.toggle_pause();
                Step::Continue
            }
            (Phase::Paused, _) => Step::Continue,
            (Phase::Running, Command::MoveLeft) => {
                self.board.move_if_possible(LEFT);
                Step::Continue
            }
            (Phase::Running, Command::MoveRight) => {
                self.board.move_if_possible(RIGHT);
                Step::Continue
            }
            (Phase::Running, Command::MoveDown) => self.move_down(),
            (Phase::Running, Command::Rotate) => {
                self.board.rotate_if_possible();
                Step::Continue
            }
            (Phase::Running, Command::QuickDrop) => self.quick_drop(),
            (Phase::Running, Command::Redraw) => Step::Continue,
        }
    }

    fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::GameOver => Phase::GameOver,
        };
        info!("pause toggled: {:?}", self.phase);
    }

    /// One row down; anchors when blocked
    pub fn move_down(&mut self) -> Step {
        if self.board.move_if_possible(DOWN) {
            return Step::Continue;
        }
        Step::Anchored(self.anchor())
    }

    /// Fall as far as possible, then anchor
    pub fn quick_drop(&mut self) -> Step {
        while self.board.move_if_possible(DOWN) {}
        Step::Anchored(self.anchor())
    }

    /// Commit the active piece and bring in the next one.
    ///
    /// Order: merge, score and clear complete rows, spawn the preview piece,
    /// draw a new preview, then test the spawn for game over.
    pub fn anchor(&mut self) -> AnchorReport {
        self.board.merge_current_piece();

        let rows = self.board.cleared_rows();
        let mut points = 0;
        let mut delay_changed = false;
        let cleared = if rows.is_empty() {
            None
        } else {
            points = line_clear_points(rows.len());
            self.score = self.score.saturating_add(points);
            let delay = drop_delay(self.score, &self.config);
            delay_changed = delay != self.drop_delay;
            self.drop_delay = delay;

            let before = self.board.clone();
            self.board.clear_rows();
            debug!(
                "cleared rows {:?} for {} points, score {}",
                rows, points, self.score
            );
            Some(ClearedRows {
                rows,
                board: before,
            })
        };

        let anchor = self.spawn_anchor();
        self.board.spawn(self.next, anchor);
        self.next = self.rng.pick(self.shapes);

        let game_over = self.board.current_piece_in_collision();
        if game_over {
            self.phase = Phase::GameOver;
            info!("game over with score {}", self.score);
        }

        AnchorReport {
            points,
            cleared,
            delay_changed,
            game_over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::shape_of;
    use crate::types::{Color, PieceKind};

    fn game() -> Game {
        Game::new(GameConfig::default(), 12345)
    }

    #[test]
    fn new_game_is_running_with_a_piece() {
        let game = game();
        assert_eq!(game.phase(), Phase::Running);
        assert!(game.board().current().is_some());
        assert_eq!(game.score(), 0);
        assert_eq!(game.drop_delay(), Duration::from_millis(800));
    }

    #[test]
    fn pause_ignores_movement() {
        let mut game = game();
        let before = *game.board().current().unwrap();

        game.handle(Command::Pause);
        assert!(game.is_paused());
        for cmd in [Command::MoveLeft, Command::MoveDown, Command::Rotate, Command::QuickDrop] {
            assert_eq!(game.handle(cmd), Step::Continue);
        }
        assert_eq!(*game.board().current().unwrap(), before);

        game.handle(Command::Pause);
        assert_eq!(game.phase(), Phase::Running);
    }

    #[test]
    fn quit_is_honoured_in_every_phase() {
        let mut game = game();
        assert_eq!(game.handle(Command::Quit), Step::Quit);
        game.handle(Command::Pause);
        assert_eq!(game.handle(Command::Quit), Step::Quit);
    }

    #[test]
    fn anchor_scores_before_spawning() {
        let mut game = game();
        let height = game.board().height();
        for x in 0..game.board().width() {
            if x != 0 {
                game.board_mut().set(x, height - 1, Some(Color::Red));
            }
        }
        let anchor = Vector::new(-1, height - 4);
        game.board_mut().spawn(shape_of(PieceKind::I), anchor);
        game.board_mut().rotate_if_possible();
        while game.board_mut().move_if_possible(DOWN) {}

        let report = game.anchor();
        assert_eq!(report.points, 100);
        assert_eq!(report.rows_cleared(), 1);
        assert_eq!(game.score(), 100);
        assert!(!report.game_over);

        let cleared = report.cleared.unwrap();
        assert!(cleared.board.row_complete(height - 1));
        assert!(!game.board().row_complete(height - 1));
    }
}
