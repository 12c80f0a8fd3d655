//! Prints the command each key maps to. Handy for checking terminal key
//! handling without starting a game. Quit with `q` or Ctrl-C.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{event, terminal};

use term_tetris::input::map_event;
use term_tetris::types::Command;

fn main() -> Result<()> {
    terminal::enable_raw_mode()?;
    let result = echo();
    let _ = terminal::disable_raw_mode();
    result
}

fn echo() -> Result<()> {
    let mut out = io::stdout();
    write!(out, "press keys, q to quit\r\n")?;
    out.flush()?;
    loop {
        let ev = event::read()?;
        let Some(command) = map_event(&ev) else {
            continue;
        };
        write!(out, "{ev:?} -> {}\r\n", command.as_str())?;
        out.flush()?;
        if command == Command::Quit {
            return Ok(());
        }
    }
}
