//! Terminal falling-block runner (default binary).
//!
//! Logs go to a file (`TETRIS_LOG_PATH`, default `term-tetris.log`) since the
//! terminal belongs to the game. Filter with `RUST_LOG`.

use std::env;
use std::fs::File;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use log::info;

use term_tetris::core::Game;
use term_tetris::engine::{run, LoopConfig, RunSummary};
use term_tetris::input::TerminalInput;
use term_tetris::term::TerminalSink;
use term_tetris::types::GameConfig;

const DEFAULT_LOG_PATH: &str = "term-tetris.log";

fn main() -> Result<()> {
    init_logging()?;

    let config = GameConfig::from_env();
    let loop_config = LoopConfig::from_env();
    let seed = seed();
    info!(
        "starting {}x{} board, seed {seed}, {:?} initial delay",
        config.width,
        config.height,
        config.initial_delay()
    );

    let mut sink = TerminalSink::new();
    sink.enter()?;

    let result = play(Game::new(config, seed), &mut sink, loop_config);

    // Always try to restore terminal state.
    let _ = sink.exit();

    let summary = result?;
    println!("Bye! Final score: {}", summary.score());
    Ok(())
}

fn play(game: Game, sink: &mut TerminalSink, config: LoopConfig) -> Result<RunSummary> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;
    runtime.block_on(run(game, TerminalInput::new(), sink, config))
}

fn init_logging() -> Result<()> {
    let path = env::var("TETRIS_LOG_PATH").unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string());
    let file = File::create(&path).with_context(|| format!("creating log file {path}"))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_module_path(false)
        .init();
    Ok(())
}

/// `TETRIS_SEED` when set, otherwise the clock.
fn seed() -> u32 {
    if let Some(seed) = env::var("TETRIS_SEED").ok().and_then(|s| s.trim().parse().ok()) {
        return seed;
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
