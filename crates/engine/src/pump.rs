//! Input pump: blocking reads on a dedicated thread, forwarded to the loop.

use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use log::{debug, warn};
use tokio::sync::mpsc;

use crate::ports::InputSource;
use crate::types::Command;

/// Start forwarding commands from `input` into `tx`.
///
/// The thread ends after forwarding [`Command::Quit`], after forwarding an
/// input error, or when the receiving loop has gone away. Nothing needs to join it.
pub fn spawn_input_pump<I: InputSource>(
    mut input: I,
    tx: mpsc::Sender<Result<Command>>,
) -> Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("input-pump".to_string())
        .spawn(move || loop {
            let command = match input.next_command() {
                Ok(command) => command,
                Err(err) => {
                    warn!("input source failed: {err:#}");
                    let _ = tx.blocking_send(Err(err));
                    return;
                }
            };
            if tx.blocking_send(Ok(command)).is_err() {
                debug!("game loop closed, input pump exiting");
                return;
            }
            if command == Command::Quit {
                return;
            }
        })
        .context("failed to spawn input thread")
}
