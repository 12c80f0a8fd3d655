//! `RenderSink` backed by a real terminal.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::terminal;
use log::info;

use crate::core::Snapshot;
use crate::engine::RenderSink;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;

pub struct TerminalSink<W: Write = io::Stdout> {
    renderer: TerminalRenderer<W>,
    view: GameView,
    fb: FrameBuffer,
    /// Fixed size; `None` follows the terminal
    viewport: Option<Viewport>,
}

impl TerminalSink<io::Stdout> {
    pub fn new() -> Self {
        Self::with_renderer(TerminalRenderer::new(), None)
    }
}

impl Default for TerminalSink<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn with_renderer(renderer: TerminalRenderer<W>, viewport: Option<Viewport>) -> Self {
        Self {
            renderer,
            view: GameView::new(),
            fb: FrameBuffer::new(0, 0),
            viewport,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        &self.renderer
    }

    /// The last frame drawn
    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    fn viewport(&self) -> Result<Viewport> {
        match self.viewport {
            Some(v) => Ok(v),
            None => {
                let (w, h) = terminal::size()?;
                Ok(Viewport::new(w, h))
            }
        }
    }
}

impl<W: Write> RenderSink for TerminalSink<W> {
    fn render(&mut self, scene: &Snapshot<'_>) -> Result<()> {
        let viewport = self.viewport()?;
        self.view.render_into(scene, viewport, &mut self.fb);
        self.renderer.draw(&self.fb)
    }

    fn announce_game_over(&mut self, scene: &Snapshot<'_>) -> Result<()> {
        info!("game over, final score {}", scene.score);
        self.renderer.invalidate();
        self.render(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Game;
    use crate::types::GameConfig;

    #[test]
    fn renders_into_a_fixed_viewport() {
        let renderer = TerminalRenderer::with_writer(Vec::new());
        let mut sink = TerminalSink::with_renderer(renderer, Some(Viewport::new(80, 40)));
        let game = Game::new(GameConfig::default(), 3);

        sink.render(&game.snapshot()).unwrap();
        assert_eq!((sink.frame().width(), sink.frame().height()), (80, 40));
        assert!(!sink.renderer().writer().is_empty());
    }
}
