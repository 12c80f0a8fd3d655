//! Scripted input for tests and headless runs.

use std::collections::VecDeque;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::warn;

use crate::ports::InputSource;
use crate::types::Command;

/// Replays a fixed list of commands, then reports [`Command::Quit`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    commands: VecDeque<Command>,
    pacing: Duration,
}

impl ScriptedInput {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
            pacing: Duration::ZERO,
        }
    }

    /// Parse whitespace-separated command names.
    ///
    /// Unknown words become [`Command::Redraw`].
    pub fn parse(script: &str) -> Self {
        Self::new(script.split_whitespace().map(|word| {
            Command::from_str(word).unwrap_or_else(|| {
                warn!("unknown scripted command {word:?}, treating as redraw");
                Command::Redraw
            })
        }))
    }

    /// Sleep this long before producing each command.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn remaining(&self) -> usize {
        self.commands.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_command(&mut self) -> Result<Command> {
        if !self.pacing.is_zero() {
            thread::sleep(self.pacing);
        }
        Ok(self.commands.pop_front().unwrap_or(Command::Quit))
    }
}
