//! GameView: maps an engine snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::engine::core::pieces;
use crate::engine::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceColor, PieceKind, BOARD_COLUMNS, BOARD_ROWS};

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const KEY_HINTS: [&str; 5] = ["<- -> move", "^  rotate", "v  drop", "SPC hard", "Q  quit"];

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

/// Vertical placement of the board inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Renders the board, the falling piece and a score panel.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares up typical terminal glyphs.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_COLUMNS as u16 * self.cell_w + 2,
            BOARD_ROWS as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(PLAY_BG, PLAY_BG),
        );
        draw_border(fb, start_x, start_y, frame_w, frame_h);

        for row in 0..BOARD_ROWS as usize {
            for col in 0..BOARD_COLUMNS as usize {
                let (ch, style) = match snap.cell(row, col) {
                    Some(kind) => ('█', block_style(kind)),
                    None => ('·', CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim()),
                };
                self.fill_cell(fb, start_x, start_y, row as u16, col as u16, ch, style);
            }
        }

        if let Some(active) = snap.active {
            for (row, col) in active.cells {
                // Cells above the top edge stay hidden.
                if row < 0 || row >= BOARD_ROWS as i8 || col < 0 || col >= BOARD_COLUMNS as i8 {
                    continue;
                }
                let style = block_style(active.kind);
                self.fill_cell(fb, start_x, start_y, row as u16, col as u16, '█', style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + col * self.cell_w;
        let py = start_y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let hint = value.dim();

        let mut y = start_y;
        for (name, v) in [("SCORE", snap.score), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, v, value);
            y += 3;
        }

        for text in KEY_HINTS {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, text, hint);
            y += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn block_style(kind: PieceKind) -> CellStyle {
    CellStyle::new(color_rgb(pieces::color(kind)), PLAY_BG).bold()
}

pub fn color_rgb(color: PieceColor) -> Rgb {
    match color {
        PieceColor::Cyan => Rgb::new(80, 220, 220),
        PieceColor::Yellow => Rgb::new(240, 220, 80),
        PieceColor::Purple => Rgb::new(170, 90, 220),
        PieceColor::Orange => Rgb::new(255, 165, 0),
        PieceColor::Blue => Rgb::new(80, 120, 220),
        PieceColor::Green => Rgb::new(100, 220, 120),
        PieceColor::Red => Rgb::new(220, 80, 80),
    }
}
