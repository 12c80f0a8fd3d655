//! Blocking terminal input source.

use anyhow::Result;
use crossterm::event;
use log::trace;

use crate::engine::InputSource;
use crate::map::map_event;
use crate::types::Command;

/// Reads crossterm events until one maps to a command.
///
/// The terminal must already be in raw mode.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn next_command(&mut self) -> Result<Command> {
        loop {
            let ev = event::read()?;
            if let Some(command) = map_event(&ev) {
                trace!("{ev:?} -> {}", command.as_str());
                return Ok(command);
            }
        }
    }
}
