//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::BlockColor;

const PLAYFIELD_BG: Rgb = Rgb::new(0, 0, 0);
const PANEL_MIN_WIDTH: u16 = 12;

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

/// Renders the board, the active piece and a side panel with the next piece.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

/// Where the board frame landed inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Total size of the bordered board for a snapshot.
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        let w = (snap.grid.cols() as u16).saturating_mul(self.cell_w);
        let h = (snap.grid.rows() as u16).saturating_mul(self.cell_h);
        (w.saturating_add(2), h.saturating_add(2))
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let (frame_w, frame_h) = self.frame_size(snap);
        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            w: frame_w,
            h: frame_h,
        };

        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        draw_border(fb, frame, border);

        for row in 0..snap.grid.rows() {
            for col in 0..snap.grid.cols() {
                match snap.cell(row, col) {
                    Some(color) => self.draw_block(fb, frame, row as i32, col as i32, color),
                    None => self.draw_empty(fb, frame, row as u16, col as u16),
                }
            }
        }

        if let Some(active) = snap.visible_active() {
            for (row, col) in active.cells() {
                self.draw_block(fb, frame, row, col, active.color);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.is_game_over() {
            draw_overlay_text(fb, frame, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, frame: Frame, row: u16, col: u16) {
        let style = CellStyle::new(Rgb::new(60, 60, 70), PLAYFIELD_BG).dim();
        let px = frame.x + 1 + col * self.cell_w;
        let py = frame.y + 1 + row * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '·', style);
    }

    /// Draw one board block. Coordinates outside the board are skipped.
    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        frame: Frame,
        row: i32,
        col: i32,
        color: BlockColor,
    ) {
        let cols = (frame.w.saturating_sub(2) / self.cell_w) as i32;
        let rows = (frame.h.saturating_sub(2) / self.cell_h) as i32;
        if row < 0 || col < 0 || row >= rows || col >= cols {
            return;
        }
        let px = frame.x + 1 + col as u16 * self.cell_w;
        let py = frame.y + 1 + row as u16 * self.cell_h;
        let style = CellStyle::new(block_rgb(color), PLAYFIELD_BG).bold();
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_WIDTH {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = frame.y;
        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if let Some(next) = snap.next.as_ref() {
            y = self.draw_preview(fb, panel_x, y, next);
        }
        y = y.saturating_add(1);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.lines_cleared, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PIECES", label);
        y = y.saturating_add(1);
        fb.put_u64(panel_x, y, snap.pieces_locked, value);
        y = y.saturating_add(2);

        let hint = value.dim();
        for line in ["arrows move", "up rotates", "q quits"] {
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    /// Draw the full next shape; returns the row below it.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, piece: &Piece) -> u16 {
        let style = CellStyle::new(block_rgb(piece.color), PLAYFIELD_BG).bold();
        for (r, c) in piece.shape.filled_cells() {
            let px = x.saturating_add(c as u16 * self.cell_w);
            let py = y.saturating_add(r as u16 * self.cell_h);
            fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
        }
        y.saturating_add(piece.shape.height() as u16 * self.cell_h)
    }
}

/// Display colour for a block tag.
pub fn block_rgb(color: BlockColor) -> Rgb {
    match color {
        BlockColor::Cyan => Rgb::new(0, 255, 255),
        BlockColor::Yellow => Rgb::new(255, 255, 0),
        BlockColor::Orange => Rgb::new(255, 165, 0),
        BlockColor::Blue => Rgb::new(0, 0, 255),
        BlockColor::Green => Rgb::new(0, 255, 0),
        BlockColor::Purple => Rgb::new(128, 0, 128),
        BlockColor::Red => Rgb::new(255, 0, 0),
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }

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

fn draw_overlay_text(fb: &mut FrameBuffer, frame: Frame, text: &str) {
    let mid_y = frame.y.saturating_add(frame.h / 2);
    let text_w = text.chars().count() as u16;
    let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    fb.put_str(x, mid_y, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_block_colour_is_distinct() {
        let all: Vec<Rgb> = BlockColor::ALL.iter().map(|&c| block_rgb(c)).collect();
        for (i, a) in all.iter().enumerate() {
            assert!(all[i + 1..].iter().all(|b| b != a));
        }
    }
}
