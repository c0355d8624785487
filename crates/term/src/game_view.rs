//! GameView: maps a core `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Lanes are drawn in pixel space scaled down to terminal cells: one board cell
//! is `cell_w` x `cell_h` terminal cells, and obstacle x positions are mapped
//! proportionally so motion stays smooth at sub-cell resolution.

use crate::core::{GameSnapshot, Lane};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{GamePhase, LaneKind, OBSTACLE_INSET};

/// Dash and gap length of the road centre marking, in pixels.
const MARKING_DASH_PX: f32 = 20.0;

const GRASS_BG: Rgb = Rgb::new(139, 195, 74);
const ROAD_BG: Rgb = Rgb::new(85, 85, 85);
const MARKING_FG: Rgb = Rgb::new(255, 235, 59);
const OBSTACLE_FG: Rgb = Rgb::new(220, 40, 40);
const CHARACTER_BG: Rgb = Rgb::new(255, 235, 59);
const CHARACTER_FG: Rgb = Rgb::new(255, 152, 0);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the crossing game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 4x1 keeps a 12-row board inside a 24-line terminal.
        Self {
            cell_w: 4,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Top-left of the board frame and its outer size.
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
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let board_w = snap.board.cols.saturating_mul(self.cell_w);
        let board_h = snap.board.rows.saturating_mul(self.cell_h);
        let frame_w = board_w.saturating_add(2);
        let frame_h = board_h.saturating_add(2);

        let frame = Frame {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
            w: frame_w,
            h: frame_h,
        };

        for (row, lane) in snap.lanes.iter().enumerate() {
            self.draw_lane(fb, snap, frame, row as u16, lane);
        }
        self.draw_character(fb, snap, frame);
        self.draw_border(fb, frame);
        self.draw_side_panel(fb, snap, viewport, frame);

        match snap.phase {
            GamePhase::Idle => {
                self.draw_overlay_line(fb, frame, -1, "CROSSY", None);
                self.draw_overlay_line(fb, frame, 1, "ENTER TO START", None);
            }
            GamePhase::Ended => {
                self.draw_overlay_line(fb, frame, -1, "GAME OVER", None);
                self.draw_overlay_line(fb, frame, 0, "SCORE ", Some(snap.display_score));
                self.draw_overlay_line(fb, frame, 1, "ENTER TO RESTART", None);
            }
            GamePhase::Running => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Terminal column offset (inside the board) of pixel `px`, rounded down.
    fn px_to_col(&self, px: f32, grid: f32) -> i32 {
        (px * f32::from(self.cell_w) / grid).floor() as i32
    }

    fn draw_lane(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame, row: u16, lane: &Lane) {
        let board_w = snap.board.cols.saturating_mul(self.cell_w);
        let grid = f32::from(snap.board.grid_size);
        let top = frame.y + 1 + row * self.cell_h;
        let left = frame.x + 1;

        let bg = match lane.kind {
            LaneKind::Grass => GRASS_BG,
            LaneKind::Road => ROAD_BG,
        };
        fb.fill_rect(left, top, board_w, self.cell_h, ' ', CellStyle::default().on(bg));

        if lane.kind != LaneKind::Road {
            return;
        }

        // Dashed centre marking.
        let marking = CellStyle::new(MARKING_FG, ROAD_BG);
        let mid = top + self.cell_h / 2;
        for tx in 0..board_w {
            let px = f32::from(tx) * grid / f32::from(self.cell_w);
            if ((px / MARKING_DASH_PX) as u32) % 2 == 0 {
                fb.put_char(left + tx, mid, '╌', marking);
            }
        }

        // Obstacle band inside the lane.
        let ch = f32::from(self.cell_h);
        let band_top = (OBSTACLE_INSET * ch / grid).floor() as u16;
        let obstacle = CellStyle::new(OBSTACLE_FG, ROAD_BG);
        for obs in &lane.obstacles {
            let band_bottom = ((OBSTACLE_INSET + obs.height) * ch / grid).ceil() as u16;
            let x0 = self.px_to_col(obs.x, grid).max(0);
            let x1 = (((obs.x + obs.width) * f32::from(self.cell_w) / grid).ceil() as i32)
                .min(i32::from(board_w));
            for tx in x0..x1 {
                for ty in band_top..band_bottom.max(band_top + 1).min(self.cell_h) {
                    fb.put_char(left + tx as u16, top + ty, '█', obstacle);
                }
            }
        }
    }

    fn draw_character(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame) {
        let c = snap.character;
        if c.col >= snap.board.cols || c.row >= snap.board.rows {
            return;
        }
        let x = frame.x + 1 + c.col * self.cell_w;
        let y = frame.y + 1 + c.row * self.cell_h;
        let style = CellStyle::new(CHARACTER_FG, CHARACTER_BG).bold();
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ' ', style);
        fb.put_char(x + self.cell_w / 2, y + self.cell_h / 2, '▲', style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

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

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = CellStyle::new(Rgb::new(130, 130, 130), Rgb::new(0, 0, 0));

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.display_score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LEVEL", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.difficulty_level, value);
        y = y.saturating_add(2);

        for line in ["arrows move", "r restart", "q quit"] {
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    /// Centered text on the board, `offset` lines from its middle.
    fn draw_overlay_line(&self, fb: &mut FrameBuffer, frame: Frame, offset: i16, text: &str, number: Option<u32>) {
        let digits = number.map_or(0, |n| n.checked_ilog10().unwrap_or(0) as u16 + 1);
        let text_w = text.chars().count() as u16 + digits;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let y = frame.y.saturating_add(frame.h / 2).saturating_add_signed(offset);

        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, y, text, style);
        if let Some(n) = number {
            fb.put_u32(x + text.chars().count() as u16, y, n, style);
        }
    }
}
