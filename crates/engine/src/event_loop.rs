//! The game loop: one consumer, two producers.
//!
//! Commands arrive from the input pump through a bounded channel; gravity
//! ticks arrive from [`Gravity`]. `select!` takes whichever is first, the
//! game handles exactly that one event, and the sink redraws. The game is
//! only ever touched from this task.

use anyhow::{Context, Result};
use log::{debug, info};
use tokio::sync::mpsc;
use tokio::time::sleep;

use crate::config::LoopConfig;
use crate::core::{ClearedRows, Game, Step};
use crate::gravity::Gravity;
use crate::ports::{InputSource, RenderSink};
use crate::pump::spawn_input_pump;
use crate::types::Command;

/// How a session ended
#[derive(Debug)]
pub struct RunSummary {
    pub game: Game,
    /// Events taken from the queue or the timer, including the final quit
    pub events: u64,
}

impl RunSummary {
    pub fn score(&self) -> u32 {
        self.game.score()
    }

    pub fn game_over(&self) -> bool {
        self.game.is_over()
    }
}

/// Run `game` until the user quits or the input goes away.
///
/// A failing [`InputSource`] ends the session with that error.
pub async fn run<I, S>(
    game: Game,
    input: I,
    mut sink: S,
    config: LoopConfig,
) -> Result<RunSummary>
where
    I: InputSource,
    S: RenderSink,
{
    let (tx, mut rx) = mpsc::channel(config.queue_capacity.max(1));
    spawn_input_pump(input, tx)?;

    let mut game = game;
    let mut gravity = if game.is_over() {
        Gravity::stopped()
    } else {
        Gravity::started(game.drop_delay())
    };
    let mut announced = false;
    let mut events = 0u64;

    sink.render(&game.snapshot())?;
    if game.is_over() {
        sink.announce_game_over(&game.snapshot())?;
        announced = true;
    }

    loop {
        let command = tokio::select! {
            received = rx.recv() => match received {
                Some(command) => command.context("reading input")?,
                None => {
                    info!("input closed, leaving game loop");
                    Command::Quit
                }
            },
            _ = gravity.tick() => Command::MoveDown,
        };
        events += 1;
        debug!("handling {}", command.as_str());

        let was_paused = game.is_paused();
        match game.handle(command) {
            Step::Quit => break,
            Step::Continue => {}
            Step::Anchored(report) => {
                if let Some(cleared) = &report.cleared {
                    gravity.stop();
                    play_line_clear(&mut sink, &game, cleared, &config).await?;
                }
                if !report.game_over && (report.cleared.is_some() || report.delay_changed) {
                    gravity.restart(game.drop_delay());
                }
            }
        }

        if game.is_paused() != was_paused {
            if game.is_paused() {
                gravity.stop();
            } else {
                gravity.restart(game.drop_delay());
            }
        }

        sink.render(&game.snapshot())?;

        if game.is_over() && !announced {
            gravity.stop();
            sink.announce_game_over(&game.snapshot())?;
            announced = true;
        }
    }

    info!("session finished after {events} events, score {}", game.score());
    Ok(RunSummary { game, events })
}

/// Flash the cleared rows on the pre-collapse board while gravity is stopped.
async fn play_line_clear<S: RenderSink>(
    sink: &mut S,
    game: &Game,
    cleared: &ClearedRows,
    config: &LoopConfig,
) -> Result<()> {
    for frame in 0..config.flash_frames {
        let rows: &[i32] = if frame % 2 == 0 { &cleared.rows } else { &[] };
        sink.render(&game.snapshot().with_flash(&cleared.board, rows))?;
        sleep(config.flash_interval).await;
    }
    Ok(())
}
