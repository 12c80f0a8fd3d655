//! GameView: lays a [`Snapshot`] out on a terminal framebuffer.
//!
//! This module is pure (no I/O).
//!
//! ```text
//! +---------------------------------------+
//! |                 header                |
//! +-----------------------+---------------+
//! |                       |   preview     |
//! |        board          +---------------+
//! |   (2 columns/cell)    |    score      |
//! +-----------------------+---------------+
//! |             instructions              |
//! +---------------------------------------+
//! ```

use crate::core::{Snapshot, Vector};
use crate::fb::{piece_rgb, CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const HEADER: [&str; 3] = ["", "  T E R M   T E T R I S", ""];

const INSTRUCTIONS: [&str; 9] = [
    "Controls:",
    "",
    "Move left       left arrow or 'h'",
    "Move right      right arrow or 'l'",
    "Move down       down arrow or 'j'",
    "Rotate piece    up arrow or 'k'",
    "Quick drop      space",
    "Pause/Resume    'p'",
    "Quit            ctrl-c or 'q'",
];

const PREVIEW_HEIGHT: u16 = 6;
const SIDEBAR_WIDTH: u16 = 20;

/// Large digits, three rows each.
const DIGITS: [[&str; 3]; 10] = [
    [" __ ", "/  \\", "\\__/"],
    ["    ", " /| ", "  | "],
    [" __ ", "  _)", " /__"],
    [" __ ", "  _)", " __)"],
    ["    ", "|__|", "   |"],
    ["  __", " |_ ", " __)"],
    [" __ ", "/__ ", "\\__)"],
    [" ___", "   /", "  / "],
    [" __ ", "(__)", "(__)"],
    [" __ ", "(__\\", " __/"],
];
const DIGIT_WIDTH: u16 = 4;

const BORDER: CellStyle = CellStyle::text(Rgb::new(80, 120, 220));
const LABEL: CellStyle = CellStyle::text(Rgb::new(235, 235, 235)).bold();
const TEXT: CellStyle = CellStyle::text(Rgb::new(200, 200, 200));
const FLASH: Rgb = Rgb::new(255, 255, 255);

/// Screen positions of every region, derived from the board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Top-left corner of the outer frame
    pub origin: (u16, u16),
    /// Top-left terminal cell of board cell (0, 0)
    pub board: (u16, u16),
    /// Left column of the sidebar
    pub sidebar_x: u16,
    pub total_width: u16,
    pub total_height: u16,
}

impl Layout {
    pub fn new(board_width: i32, board_height: i32, viewport: Viewport) -> Self {
        let header_h = HEADER.len() as u16;
        let board_w = board_width.max(0) as u16 * 2;
        let board_h = (board_height.max(0) as u16).max(PREVIEW_HEIGHT + 6);
        let total_width = board_w + SIDEBAR_WIDTH + 3;
        let total_height = header_h + board_h + INSTRUCTIONS.len() as u16 + 4;

        let ox = viewport.width.saturating_sub(total_width) / 2;
        let oy = viewport.height.saturating_sub(total_height) / 2;
        Self {
            origin: (ox, oy),
            board: (ox + 1, oy + header_h + 2),
            sidebar_x: ox + board_w + 2,
            total_width,
            total_height,
        }
    }

    fn header_rule(&self) -> u16 {
        self.board.1 - 1
    }

    fn footer_rule(&self) -> u16 {
        self.origin.1 + self.total_height - INSTRUCTIONS.len() as u16 - 2
    }

    fn right(&self) -> u16 {
        self.origin.0 + self.total_width - 1
    }

    fn bottom(&self) -> u16 {
        self.origin.1 + self.total_height - 1
    }
}

/// Renders snapshots with two terminal columns per board cell.
#[derive(Debug, Clone, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &Snapshot<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);
        let layout = Layout::new(snap.board.width(), snap.board.height(), viewport);

        self.draw_frame(fb, &layout, snap.board.width());
        fb.put_lines(layout.origin.0 + 1, layout.origin.1 + 1, &HEADER, LABEL);
        self.draw_board(fb, &layout, snap);
        self.draw_preview(fb, &layout, snap);
        self.draw_score(fb, &layout, snap.score);
        let footer = layout.footer_rule() + 1;
        fb.put_lines(layout.origin.0 + 3, footer, &INSTRUCTIONS, TEXT);

        if snap.game_over {
            self.draw_banner(fb, &layout, snap, &["GAME OVER", "press q"]);
        } else if snap.paused {
            self.draw_banner(fb, &layout, snap, &["PAUSED"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &Snapshot<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, layout: &Layout, board_width: i32) {
        let (left, top) = layout.origin;
        let right = layout.right();
        let bottom = layout.bottom();
        let divider = layout.sidebar_x - 1;
        let preview_rule = layout.board.1 + PREVIEW_HEIGHT;

        for x in left + 1..right {
            fb.put_char(x, top, '─', BORDER);
            fb.put_char(x, layout.header_rule(), '─', BORDER);
            fb.put_char(x, layout.footer_rule(), '─', BORDER);
            fb.put_char(x, bottom, '─', BORDER);
        }
        for x in divider + 1..right {
            fb.put_char(x, preview_rule, '─', BORDER);
        }
        for y in top + 1..bottom {
            fb.put_char(left, y, '│', BORDER);
            fb.put_char(right, y, '│', BORDER);
        }
        // Heavy rules around the playfield
        for x in left + 1..left + 1 + board_width.max(0) as u16 * 2 {
            fb.put_char(x, layout.header_rule(), '━', BORDER);
            fb.put_char(x, layout.footer_rule(), '━', BORDER);
        }
        for y in layout.board.1..layout.footer_rule() {
            fb.put_char(divider, y, '┃', BORDER);
        }

        fb.put_char(left, top, '┌', BORDER);
        fb.put_char(right, top, '┐', BORDER);
        fb.put_char(left, bottom, '└', BORDER);
        fb.put_char(right, bottom, '┘', BORDER);
        fb.put_char(left, layout.header_rule(), '├', BORDER);
        fb.put_char(divider, layout.header_rule(), '┱', BORDER);
        fb.put_char(right, layout.header_rule(), '┤', BORDER);
        fb.put_char(divider, preview_rule, '┠', BORDER);
        fb.put_char(right, preview_rule, '┤', BORDER);
        fb.put_char(left, layout.footer_rule(), '├', BORDER);
        fb.put_char(divider, layout.footer_rule(), '┹', BORDER);
        fb.put_char(right, layout.footer_rule(), '┤', BORDER);
    }

    fn draw_board(&self, fb: &mut FrameBuffer, layout: &Layout, snap: &Snapshot<'_>) {
        for y in 0..snap.board.height() {
            let flashing = snap.is_flashing(y);
            for x in 0..snap.board.width() {
                let style = if flashing {
                    CellStyle::solid(FLASH)
                } else {
                    match snap.board.cell_color(Vector::new(x, y)) {
                        Some(color) => CellStyle::solid(piece_rgb(color)),
                        None => CellStyle::default(),
                    }
                };
                let px = layout.board.0 + x as u16 * 2;
                let py = layout.board.1 + y as u16;
                fb.fill_rect(px, py, 2, 1, ' ', style);
            }
        }
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, layout: &Layout, snap: &Snapshot<'_>) {
        let top = layout.board.1;
        fb.put_str_vertical(layout.sidebar_x + 2, top + 1, "NEXT", LABEL);

        let style = CellStyle::solid(piece_rgb(snap.next.color));
        let base_x = layout.sidebar_x + 6;
        let base_y = top + 1;
        for cell in snap.next.variant(0) {
            let px = base_x + cell.x.max(0) as u16 * 2;
            let py = base_y + cell.y.max(0) as u16;
            fb.fill_rect(px, py, 2, 1, ' ', style);
        }
    }

    fn draw_score(&self, fb: &mut FrameBuffer, layout: &Layout, score: u32) {
        let top = layout.board.1 + PREVIEW_HEIGHT + 2;
        fb.put_str(layout.sidebar_x + 7, top, "SCORE", LABEL);

        let digits = score.to_string();
        let art_width = digits.len() as u16 * DIGIT_WIDTH;
        if art_width > SIDEBAR_WIDTH - 1 {
            fb.put_str(layout.sidebar_x + 2, top + 2, &digits, TEXT);
            return;
        }
        let x0 = layout.sidebar_x + (SIDEBAR_WIDTH - art_width) / 2;
        for (i, ch) in digits.chars().enumerate() {
            let digit = ch.to_digit(10).unwrap_or(0) as usize;
            fb.put_lines(x0 + i as u16 * DIGIT_WIDTH, top + 1, &DIGITS[digit], TEXT);
        }
    }

    fn draw_banner(
        &self,
        fb: &mut FrameBuffer,
        layout: &Layout,
        snap: &Snapshot<'_>,
        lines: &[&str],
    ) {
        let board_w = snap.board.width().max(0) as u16 * 2;
        let mid = layout.board.1 + snap.board.height().max(0) as u16 / 2;
        for (i, line) in lines.iter().enumerate() {
            let w = line.chars().count() as u16;
            let x = layout.board.0 + board_w.saturating_sub(w) / 2;
            fb.put_str(x, mid + i as u16, line, LABEL);
        }
    }
}
