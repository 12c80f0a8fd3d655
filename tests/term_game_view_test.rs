use term_tetris::core::{Board, Game};
use term_tetris::term::{piece_rgb, FrameBuffer, GameView, Layout, Rgb, Viewport};
use term_tetris::types::{Color, GameConfig};

fn all_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
}

fn fitted(board: &Board) -> Viewport {
    let layout = Layout::new(board.width(), board.height(), Viewport::new(0, 0));
    Viewport::new(layout.total_width, layout.total_height)
}

#[test]
fn term_view_renders_border_corners() {
    let game = Game::new(GameConfig::default(), 1);
    let vp = fitted(game.board());
    let fb = GameView::default().render(&game.snapshot(), vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(vp.width - 1, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, vp.height - 1).unwrap().ch, '└');
    assert_eq!(fb.get(vp.width - 1, vp.height - 1).unwrap().ch, '┘');
}

#[test]
fn term_view_layout_is_centred() {
    let layout = Layout::new(10, 18, Viewport::new(200, 100));
    let inner = Layout::new(10, 18, Viewport::new(0, 0));
    assert_eq!(layout.origin.0, (200 - inner.total_width) / 2);
    assert_eq!(layout.origin.1, (100 - inner.total_height) / 2);
}

#[test]
fn term_view_settled_cell_is_two_columns_wide() {
    let config = GameConfig::default();
    let mut game = Game::new(config, 1);
    game.board_mut().set(0, config.height - 1, Some(Color::Red));

    let vp = fitted(game.board());
    let layout = Layout::new(config.width, config.height, vp);
    let fb = GameView::default().render(&game.snapshot(), vp);

    let (x0, y0) = layout.board;
    let y = y0 + config.height as u16 - 1;
    assert_eq!(fb.get(x0, y).unwrap().style.bg, piece_rgb(Color::Red));
    assert_eq!(fb.get(x0 + 1, y).unwrap().style.bg, piece_rgb(Color::Red));
    assert_ne!(fb.get(x0 + 2, y).unwrap().style.bg, piece_rgb(Color::Red));
}

#[test]
fn term_view_draws_active_piece() {
    let game = Game::new(GameConfig::default(), 1);
    let piece = *game.board().current().unwrap();
    let vp = fitted(game.board());
    let layout = Layout::new(10, 18, vp);
    let fb = GameView::default().render(&game.snapshot(), vp);

    for p in piece.cells() {
        let x = layout.board.0 + p.x as u16 * 2;
        let y = layout.board.1 + p.y as u16;
        assert_eq!(fb.get(x, y).unwrap().style.bg, piece_rgb(piece.color()));
    }
}

#[test]
fn term_view_draws_side_panel() {
    let game = Game::new(GameConfig::default(), 1);
    let mut snap = game.snapshot();
    snap.score = 1234;

    let vp = fitted(game.board());
    let layout = Layout::new(10, 18, vp);
    let fb = GameView::default().render(&snap, vp);
    let text = all_text(&fb);

    assert!(text.contains("SCORE"));
    assert!(text.contains("Controls:"));
    let next: String = (0..4)
        .filter_map(|i| fb.get(layout.sidebar_x + 2, layout.board.1 + 1 + i))
        .map(|c| c.ch)
        .collect();
    assert_eq!(next, "NEXT");

    let preview = (layout.sidebar_x..vp.width).any(|x| {
        (1..3).any(|dy| {
            fb.get(x, layout.board.1 + dy)
                .is_some_and(|c| c.style.bg == piece_rgb(snap.next.color))
        })
    });
    assert!(preview);
}

#[test]
fn term_view_shows_overlays() {
    let config = GameConfig::default();
    let mut game = Game::new(config, 1);
    game.handle(term_tetris::types::Command::Pause);
    let vp = fitted(game.board());
    let text = all_text(&GameView::default().render(&game.snapshot(), vp));
    assert!(text.contains("PAUSED"));
    assert!(!text.contains("GAME OVER"));

    let mut board = Board::from_config(&config);
    for x in 1..config.width {
        board.set(x, 0, Some(Color::Red));
    }
    let over = Game::with_board(config, board, 1);
    let text = all_text(&GameView::default().render(&over.snapshot(), vp));
    assert!(text.contains("GAME OVER"));
}

#[test]
fn term_view_highlights_flashing_rows() {
    let config = GameConfig::default();
    let game = Game::new(config, 1);
    let rows = [config.height - 1];
    let snap = game.snapshot().with_flash(game.board(), &rows);

    let vp = fitted(game.board());
    let layout = Layout::new(config.width, config.height, vp);
    let fb = GameView::default().render(&snap, vp);

    let y = layout.board.1 + config.height as u16 - 1;
    for x in 0..config.width as u16 * 2 {
        assert_eq!(fb.get(layout.board.0 + x, y).unwrap().style.bg, Rgb::new(255, 255, 255));
    }
}

#[test]
fn term_view_survives_tiny_viewport() {
    let game = Game::new(GameConfig::default(), 1);
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(8, 3));
    assert_eq!((fb.width(), fb.height()), (8, 3));
}

#[test]
fn term_view_handles_largest_board() {
    let config = GameConfig::with_size(i32::MAX, i32::MAX);
    let game = Game::new(config, 1);
    let vp = fitted(game.board());
    let fb = GameView::default().render(&game.snapshot(), vp);
    assert_eq!(fb.get(vp.width - 1, vp.height - 1).unwrap().ch, '┘');
}
