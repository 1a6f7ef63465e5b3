//! GameView: maps a lane [`Grid`] plus status text into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout, top to bottom, centered in the viewport:
//!
//! ```text
//! status line
//! (blank)
//! ┌──────────┐
//! │ lane     │
//! └──────────┘
//! footer hint
//! ```

use crate::core::Grid;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::palette::Palette;

/// Rows used above and below the bordered lane.
const STATUS_ROWS: u16 = 2;
const FOOTER_ROWS: u16 = 1;

pub const FOOTER: &str = "Press Q to quit anytime";

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

#[derive(Debug, Clone, Default)]
pub struct GameView {
    palette: Palette,
}

impl GameView {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Total size of the drawn block for a grid.
    pub fn block_size(grid: &Grid) -> (u16, u16) {
        (grid.width() + 2, grid.height() + 2 + STATUS_ROWS + FOOTER_ROWS)
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, grid: &Grid, status: &str, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let (block_w, block_h) = Self::block_size(grid);
        let start_x = viewport.width.saturating_sub(block_w) / 2;
        let start_y = viewport.height.saturating_sub(block_h) / 2;

        let text = CellStyle::default().bold();
        fb.put_str(start_x, start_y, status, text);

        let frame_y = start_y + STATUS_ROWS;
        let border = CellStyle::new(Rgb::new(120, 160, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, frame_y, block_w, grid.height() + 2, border);

        for y in 0..grid.height() {
            for (x, tile) in grid.row(y).iter().enumerate() {
                fb.set(start_x + 1 + x as u16, frame_y + 1 + y, self.palette.cell(*tile));
            }
        }

        let hint = CellStyle::new(Rgb::new(140, 140, 140), Rgb::new(0, 0, 0));
        fb.put_str(start_x, frame_y + grid.height() + 2, FOOTER, hint);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, grid: &Grid, status: &str, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(grid, status, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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
}
