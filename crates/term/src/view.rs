//! BoardView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Style};
use crate::palette;

const BLOCK: char = '█';
const PANEL_GAP: u16 = 2;
const PANEL_WIDTH: u16 = 12;
/// Rows used by the side panel: three labelled values, the preview label and a 4x4 preview.
const PANEL_ROWS: u16 = 14;

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

/// Draws the board framed at the center of the viewport, with a side panel.
#[derive(Debug, Clone, Copy)]
pub struct BoardView {
    /// Terminal columns per board cell.
    cell_w: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl BoardView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        (
            snap.board
                .width()
                .saturating_mul(self.cell_w)
                .saturating_add(2),
            snap.board.height().saturating_add(2),
        )
    }

    /// Smallest viewport that shows board and panel without clipping.
    pub fn required_size(&self, snap: &GameSnapshot) -> Viewport {
        let (frame_w, frame_h) = self.frame_size(snap);
        Viewport::new(
            frame_w + PANEL_GAP + PANEL_WIDTH,
            frame_h.max(PANEL_ROWS),
        )
    }

    /// Top-left corner of the board frame.
    pub fn origin(&self, snap: &GameSnapshot, viewport: Viewport) -> (u16, u16) {
        let needed = self.required_size(snap);
        let (_, frame_h) = self.frame_size(snap);
        (
            viewport.width.saturating_sub(needed.width) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::new(' ', Style::new(palette::PANEL_TEXT, palette::PANEL)));

        let (ox, oy) = self.origin(snap, viewport);
        let (frame_w, frame_h) = self.frame_size(snap);

        draw_border(fb, ox, oy, frame_w, frame_h);

        for y in 0..snap.board.height() {
            for x in 0..snap.board.width() {
                let glyph = match palette::cell(snap.cell_at(x as i32, y as i32)) {
                    Some(color) => Glyph::new(BLOCK, Style::new(color, palette::BACKGROUND)),
                    None => Glyph::new(' ', Style::new(palette::TEXT, palette::BACKGROUND)),
                };
                fb.fill_rect(ox + 1 + x * self.cell_w, oy + 1 + y, self.cell_w, 1, glyph);
            }
        }

        self.draw_panel(fb, snap, ox + frame_w + PANEL_GAP, oy);

        if snap.paused() {
            draw_banner(fb, ox, oy, frame_w, frame_h, &["PAUSED"]);
        } else if snap.game_over() {
            draw_banner(fb, ox, oy, frame_w, frame_h, &["GAME OVER", "any key: again"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let label = Style::new(palette::PANEL_TEXT, palette::PANEL).bold();
        let value = Style::new(palette::PANEL_TEXT, palette::PANEL);

        fb.put_str(x, y, "SCORE", label);
        fb.put_u32(x, y + 1, snap.score, value);

        // One decimal: the level grows by a tenth per row.
        let tenths = (snap.level * 10.0).round() as u32;
        fb.put_str(x, y + 3, "LEVEL", label);
        let w = fb.put_u32(x, y + 4, tenths / 10, value);
        fb.put_str(x + w, y + 4, ".", value);
        fb.put_u32(x + w + 1, y + 4, tenths % 10, value);

        fb.put_str(x, y + 6, "LINES", label);
        fb.put_u32(x, y + 7, snap.lines, value);

        fb.put_str(x, y + 9, "NEXT", label);
        let Some(next) = snap.next else {
            return;
        };
        let color = palette::piece(next.kind());
        for row in 0..next.size() {
            for col in 0..next.size() {
                if next.is_filled(row, col) {
                    fb.fill_rect(
                        x + col as u16 * self.cell_w,
                        y + 10 + row as u16,
                        self.cell_w,
                        1,
                        Glyph::new(BLOCK, Style::new(color, palette::PANEL)),
                    );
                }
            }
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    if w < 2 || h < 2 {
        return;
    }
    let style = Style::new(palette::BORDER, palette::PANEL);
    let put = |fb: &mut FrameBuffer, x, y, ch| fb.set(x, y, Glyph::new(ch, style));

    put(fb, x, y, '┌');
    put(fb, x + w - 1, y, '┐');
    put(fb, x, y + h - 1, '└');
    put(fb, x + w - 1, y + h - 1, '┘');
    for dx in 1..w - 1 {
        put(fb, x + dx, y, '─');
        put(fb, x + dx, y + h - 1, '─');
    }
    for dy in 1..h - 1 {
        put(fb, x, y + dy, '│');
        put(fb, x + w - 1, y + dy, '│');
    }
}

/// Lines of text on a light band across the middle of the board.
fn draw_banner(fb: &mut FrameBuffer, x: u16, y: u16, frame_w: u16, frame_h: u16, lines: &[&str]) {
    let style = Style::new(palette::TEXT, palette::OVERLAY).bold();
    let inner_w = frame_w.saturating_sub(2);
    let top = y + frame_h.saturating_sub(lines.len() as u16) / 2;

    for (i, text) in lines.iter().enumerate() {
        let row = top + i as u16;
        fb.fill_rect(x + 1, row, inner_w, 1, Glyph::new(' ', style));
        let text_w = text.chars().count() as u16;
        fb.put_str(x + 1 + inner_w.saturating_sub(text_w) / 2, row, text, style);
    }
}
