//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, HazardView};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GridPos, Phase};

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

/// Lines reserved under the board frame for the timer, hints and status.
pub const HUD_ROWS: u16 = 3;

/// Fallback tile sizes, largest first, for viewports too small for the preferred one.
const TILE_SIZES: [(u16, u16); 3] = [(4, 2), (2, 1), (1, 1)];

const BACKDROP: Rgb = Rgb::new(10, 10, 20);
const GRID_LINE: Rgb = Rgb::new(200, 200, 200);
const GOAL_COLOR: Rgb = Rgb::new(255, 215, 0);
const PLAYER_COLOR: Rgb = Rgb::new(250, 250, 250);
const WHITE: Rgb = Rgb::new(255, 255, 255);
const BAR_FILL: Rgb = Rgb::new(60, 180, 60);
const BAR_EMPTY: Rgb = Rgb::new(200, 200, 200);
const WIN_COLOR: Rgb = Rgb::new(40, 160, 40);
const LOSE_COLOR: Rgb = Rgb::new(200, 40, 40);

/// Where the board lands in the viewport for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    origin_x: u16,
    origin_y: u16,
    tile_w: u16,
    tile_h: u16,
    frame_w: u16,
    frame_h: u16,
}

impl Layout {
    fn tile_origin(&self, pos: GridPos) -> (u16, u16) {
        (
            self.origin_x + 1 + pos.col as u16 * self.tile_w,
            self.origin_y + 1 + pos.row as u16 * self.tile_h,
        )
    }

    /// Left column, width and row of the glyph run marking a token on a tile.
    fn mark(&self, pos: GridPos) -> (u16, u16, u16) {
        let (x, y) = self.tile_origin(pos);
        let w = (self.tile_w / 2).max(1);
        (x + (self.tile_w - w) / 2, w, y + (self.tile_h - 1) / 2)
    }
}

/// A lightweight terminal renderer for the board, tokens and HUD.
pub struct GameView {
    /// Preferred tile size; shrunk automatically when the viewport is small.
    tile_w: u16,
    tile_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2:1 width-to-height keeps tiles roughly square in most fonts.
        let (tile_w, tile_h) = TILE_SIZES[0];
        Self { tile_w, tile_h }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::new(GRID_LINE, BACKDROP).cell(' '));

        let Some(layout) = self.layout(snap, viewport) else {
            fb.put_str(0, 0, "terminal too small", CellStyle::default());
            return;
        };

        self.draw_border(fb, &layout);
        self.draw_tiles(fb, snap, &layout);
        for hazard in snap.hazards.iter() {
            self.draw_hazard(fb, snap, &layout, hazard);
        }
        self.draw_player(fb, &layout, snap.player);
        self.draw_hud(fb, snap, &layout, viewport);

        match (snap.phase, snap.paused) {
            (Phase::Won, _) => {
                self.draw_banner(fb, &layout, "YOU WIN!", "Press R to play again", WIN_COLOR)
            }
            (Phase::Lost, _) => {
                self.draw_banner(fb, &layout, "GAME OVER", "Press R to try again", LOSE_COLOR)
            }
            (Phase::Playing, true) => {
                self.draw_banner(fb, &layout, "PAUSED", "Press P to resume", GRID_LINE)
            }
            (Phase::Playing, false) => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn layout(&self, snap: &GameSnapshot, viewport: Viewport) -> Option<Layout> {
        let cols = snap.cols as u16;
        let rows = snap.rows as u16;
        if cols == 0 || rows == 0 {
            return None;
        }

        std::iter::once((self.tile_w, self.tile_h))
            .chain(
                TILE_SIZES
                    .iter()
                    .copied()
                    .filter(|&(w, h)| w <= self.tile_w && h <= self.tile_h),
            )
            .find_map(|(tile_w, tile_h)| {
                // Overflow means the tile size cannot fit any viewport.
                let frame_w = cols.checked_mul(tile_w)?.checked_add(2)?;
                let frame_h = rows.checked_mul(tile_h)?.checked_add(2)?;
                let total_h = frame_h.checked_add(HUD_ROWS)?;
                if frame_w > viewport.width || total_h > viewport.height {
                    return None;
                }
                Some(Layout {
                    origin_x: (viewport.width - frame_w) / 2,
                    origin_y: (viewport.height - total_h) / 2,
                    tile_w,
                    tile_h,
                    frame_w,
                    frame_h,
                })
            })
    }

    fn draw_border(&self, fb: &mut FrameBuffer, l: &Layout) {
        let style = CellStyle::new(GRID_LINE, BACKDROP);
        let (x, y, w, h) = (l.origin_x, l.origin_y, l.frame_w, l.frame_h);

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

    fn draw_tiles(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, l: &Layout) {
        for row in 0..snap.rows as i16 {
            for col in 0..snap.cols as i16 {
                let pos = GridPos::new(col, row);
                let (x, y) = l.tile_origin(pos);
                let bg = tile_color(snap, pos);
                fb.fill_rect(x, y, l.tile_w, l.tile_h, ' ', CellStyle::new(GRID_LINE, bg));
            }
        }

        let (x, w, y) = l.mark(snap.goal);
        let star = CellStyle::new(WHITE, GOAL_COLOR).bold();
        fb.fill_rect(x, y, w, 1, '★', star);
    }

    fn draw_hazard(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, l: &Layout, h: &HazardView) {
        if !h.position.in_bounds(snap.cols, snap.rows) {
            return;
        }
        let (tx, ty) = l.tile_origin(h.position);
        let base = tile_color(snap, h.position);
        let hue = (h.position.col + h.position.row) as f32 / (snap.cols as f32 + snap.rows as f32);
        let glow_bg = base.lerp(Rgb::from_hsv(hue, 0.8, 1.0), glow_alpha(h.alpha));
        fb.fill_rect(tx, ty, l.tile_w, l.tile_h, ' ', CellStyle::new(GRID_LINE, glow_bg));

        let (x, w, y) = l.mark(h.position);
        let core = CellStyle::new(glow_bg.lerp(WHITE, h.alpha), glow_bg);
        fb.fill_rect(x, y, w, 1, '●', core);
    }

    fn draw_player(&self, fb: &mut FrameBuffer, l: &Layout, pos: GridPos) {
        let (x, w, y) = l.mark(pos);
        for dx in 0..w {
            let bg = fb.get(x + dx, y).map(|c| c.style.bg).unwrap_or(BACKDROP);
            fb.put_char(x + dx, y, '◉', CellStyle::new(PLAYER_COLOR, bg).bold());
        }
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, l: &Layout, viewport: Viewport) {
        let text = CellStyle::new(Rgb::new(230, 230, 230), BACKDROP);
        let label = text.bold();
        let x0 = l.origin_x;
        let y0 = l.origin_y + l.frame_h;

        // Timer line: text, then a bar over the remaining frame width.
        let mut x = fb.put_str(x0, y0, "Time left: ", label);
        x = fb.put_u32(x, y0, snap.time_left.floor() as u32, text);
        x = fb.put_str(x, y0, "s ", text);
        let bar_end = x0 + l.frame_w;
        if x < bar_end {
            let bar_w = bar_end - x;
            let filled = (bar_w as f64 * snap.time_fraction()).floor() as u16;
            fb.fill_rect(x, y0, filled, 1, '█', CellStyle::new(BAR_FILL, BACKDROP));
            fb.fill_rect(x + filled, y0, bar_w - filled, 1, '░', CellStyle::new(BAR_EMPTY, BACKDROP));
        }

        let hint = "Arrows move. Avoid qubits! Reach the golden tile. P pause, R restart, Q quit.";
        let hint_x = if hint.chars().count() as u16 > viewport.width { 0 } else { x0 };
        fb.put_str(hint_x, y0 + 1, hint, text);

        let mut x = fb.put_str(x0, y0 + 2, "Run ", label);
        x = fb.put_u32(x, y0 + 2, snap.episode_id.saturating_add(1), text);
        x = fb.put_str(x, y0 + 2, "  Moves ", label);
        fb.put_u32(x, y0 + 2, snap.moves, text);
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, l: &Layout, title: &str, sub: &str, color: Rgb) {
        let mid_y = l.origin_y + l.frame_h / 2;
        let box_w = title.chars().count().max(sub.chars().count()) as u16 + 4;
        let box_w = box_w.min(l.frame_w);
        let box_x = l.origin_x + (l.frame_w - box_w) / 2;
        let panel = CellStyle::new(WHITE, Rgb::new(20, 20, 30));
        fb.fill_rect(box_x, mid_y.saturating_sub(1), box_w, 3, ' ', panel);

        let centered = |s: &str| l.origin_x + l.frame_w.saturating_sub(s.chars().count() as u16) / 2;
        fb.put_str(centered(title), mid_y.saturating_sub(1), title, CellStyle::new(color, panel.bg).bold());
        fb.put_str(centered(sub), mid_y + 1, sub, CellStyle::new(Rgb::new(180, 180, 180), panel.bg));
    }
}

/// Checkerboard color: hue drifts across the board, value alternates per tile.
fn tile_color(snap: &GameSnapshot, pos: GridPos) -> Rgb {
    if pos == snap.goal {
        return GOAL_COLOR;
    }
    let span = |n: u8, i: i16| if n > 1 { i as f32 / (n - 1) as f32 } else { 0.0 };
    let hue = (span(snap.cols, pos.col) + span(snap.rows, pos.row)) / 2.5;
    let value = if (pos.col + pos.row) % 2 == 0 { 0.95 } else { 0.82 };
    Rgb::from_hsv(hue + 0.07, 0.55, value)
}

/// Glow opacity for a hazard with fade `alpha` in `[0, 1]`.
fn glow_alpha(alpha: f32) -> f32 {
    let a = (alpha.clamp(0.0, 1.0) * 255.0) as u32;
    (a / 2 + 60).min(120) as f32 / 255.0
}
