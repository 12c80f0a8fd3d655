//! Collaborator contracts the loop calls out to.

use anyhow::Result;

use crate::core::Snapshot;
use crate::types::Command;

/// Produces user commands.
///
/// `next_command` blocks until the user does something. Implementations map
/// anything they do not recognise to [`Command::Redraw`].
pub trait InputSource: Send + 'static {
    fn next_command(&mut self) -> Result<Command>;
}

/// Draws frames.
pub trait RenderSink {
    /// Called after every processed event.
    fn render(&mut self, scene: &Snapshot<'_>) -> Result<()>;

    /// Called once when the game ends. Afterwards only quit is accepted.
    fn announce_game_over(&mut self, scene: &Snapshot<'_>) -> Result<()>;
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn render(&mut self, scene: &Snapshot<'_>) -> Result<()> {
        (**self).render(scene)
    }

    fn announce_game_over(&mut self, scene: &Snapshot<'_>) -> Result<()> {
        (**self).announce_game_over(scene)
    }
}
