//! GameView: maps an engine snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::engine::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, Color, COLS, ROWS};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Terminal color for an engine color token.
pub fn palette(color: Color) -> Rgb {
    match color {
        Color::Red => Rgb::new(220, 80, 80),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Purple => Rgb::new(200, 120, 220),
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Orange => Rgb::new(255, 165, 0),
    }
}

/// Board renderer with a configurable cell size.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of the bordered board in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (COLS as u16) * self.cell_w + 2,
            (ROWS as u16) * self.cell_h + 2,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Allocation-free: callers keep one framebuffer across frames and it is
    /// only resized when the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().glyph(' '));

        let (frame_w, frame_h) = self.frame_size();
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        for (row, cells) in snap.grid.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let glyph = match cell {
                    Cell::Vacant => {
                        CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG).glyph('·')
                    }
                    Cell::Occupied(color) => {
                        CellStyle::new(palette(*color), BOARD_BG).bold().glyph('█')
                    }
                };
                let (px, py) = self.cell_origin(origin_x, origin_y, row as u16, col as u16);
                fb.fill_rect(px, py, self.cell_w, self.cell_h, glyph);
            }
        }

        // Only the visible part of the falling piece is drawn.
        if let Some(active) = snap.active {
            let glyph = CellStyle::new(palette(active.color), BOARD_BG)
                .bold()
                .glyph('█');
            for (row, col) in active.visible_cells() {
                let (px, py) = self.cell_origin(origin_x, origin_y, row as u16, col as u16);
                fb.fill_rect(px, py, self.cell_w, self.cell_h, glyph);
            }
        }

        self.draw_side_panel(fb, snap, viewport, origin_x + frame_w + 2, origin_y);

        if snap.game_over {
            let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
            let mid_y = origin_y + frame_h / 2;
            self.draw_centered(fb, origin_x, frame_w, mid_y, "GAME OVER", style);
            self.draw_centered(fb, origin_x, frame_w, mid_y + 1, "r: restart", style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn cell_origin(&self, origin_x: u16, origin_y: u16, row: u16, col: u16) -> (u16, u16) {
        (
            origin_x + 1 + col * self.cell_w,
            origin_y + 1 + row * self.cell_h,
        )
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let right = x + w - 1;
        let bottom = y + h - 1;

        fb.set(x, y, style.glyph('┌'));
        fb.set(right, y, style.glyph('┐'));
        fb.set(x, bottom, style.glyph('└'));
        fb.set(right, bottom, style.glyph('┘'));
        for cx in x + 1..right {
            fb.set(cx, y, style.glyph('─'));
            fb.set(cx, bottom, style.glyph('─'));
        }
        for cy in y + 1..bottom {
            fb.set(x, cy, style.glyph('│'));
            fb.set(right, cy, style.glyph('│'));
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        top: u16,
    ) {
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = top;
        for (name, n) in [
            ("SCORE", snap.score),
            ("LINES", snap.lines),
            ("LAST", snap.last_clear),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y += 3;
        }

        for help in ["←→ move", "↑ rotate", "↓ drop", "q quit"] {
            fb.put_str(panel_x, y, help, value);
            y += 1;
        }
    }

    fn draw_centered(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        frame_w: u16,
        y: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = origin_x + frame_w.saturating_sub(text_w) / 2;
        fb.put_str(x, y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_scales_with_cell_size() {
        assert_eq!(GameView::default().frame_size(), (22, 22));
        assert_eq!(GameView::new(1, 1).frame_size(), (12, 22));
        assert_eq!(GameView::new(0, 0).frame_size(), (12, 22));
    }

    #[test]
    fn palette_is_distinct_per_color() {
        let colors = [
            Color::Red,
            Color::Green,
            Color::Yellow,
            Color::Blue,
            Color::Purple,
            Color::Cyan,
            Color::Orange,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(palette(*a), palette(*b));
            }
        }
    }
}
