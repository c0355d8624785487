//! Core types module - shared data structures and constants
//!
//! Pure data types with no external dependencies, usable from the core
//! simulation, the terminal renderer and the input layer alike.
//!
//! # Board Geometry
//!
//! The playfield is a grid of lanes addressed by `(col, row)`, row 0 at the top.
//! Geometry is expressed in "pixels" (`GRID_SIZE` per cell) so obstacle motion and
//! collision are independent of how a renderer scales the board.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 50 | Pixels per grid cell |
//! | `COLS` | 8 | Columns (canvas 400px wide) |
//! | `ROWS` | 12 | Rows (canvas 600px tall) |
//! | `CHARACTER_SIZE` | 40 | Character square, inset 10px in its cell |
//! | `OBSTACLE_WIDTH` x `OBSTACLE_HEIGHT` | 60 x 20 | Obstacle box, inset 15px from the row top |
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep (~60 FPS) |
//! | `WRAP_DELAY_MS` | 100 | Delay before the character snaps back from the top row |
//! | `MAX_CATCH_UP_TICKS` | 5 | Ticks run per `advance` call before excess time is dropped |
//!
//! # Examples
//!
//! ```
//! use crossy_types::{Board, Direction, LaneKind, ROWS};
//!
//! let board = Board::default();
//! assert_eq!(board.rows, ROWS);
//! assert_eq!(board.canvas_width(), 400.0);
//! assert_eq!(board.lane_kind(0), LaneKind::Grass);
//! assert_eq!(board.lane_kind(2), LaneKind::Road);
//!
//! assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
//! assert_eq!(Direction::from_str("sideways"), None);
//! ```

/// Pixels per grid cell.
pub const GRID_SIZE: u16 = 50;

/// Default board width in cells.
pub const COLS: u16 = 8;

/// Default board height in cells.
pub const ROWS: u16 = 12;

/// Character box edge length in pixels.
pub const CHARACTER_SIZE: f32 = 40.0;

/// Character box offset from its cell's top-left corner.
pub const CHARACTER_INSET: f32 = 10.0;

/// Column the character starts each game in.
pub const START_COL: u16 = 3;

pub const OBSTACLE_WIDTH: f32 = 60.0;
pub const OBSTACLE_HEIGHT: f32 = 20.0;

/// Obstacle box offset from the top of its row.
pub const OBSTACLE_INSET: f32 = 15.0;

/// First obstacle x position in a road lane (off-canvas to the left).
pub const OBSTACLE_START_X: f32 = -50.0;

/// Obstacles are placed until x reaches `canvas_width + OBSTACLE_TAIL_PX`.
pub const OBSTACLE_TAIL_PX: f32 = 50.0;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS).
pub const TICK_MS: u32 = 16;

/// Delay before the character returns to the start row after reaching row 0.
pub const WRAP_DELAY_MS: u32 = 100;

/// Upper bound on ticks run by a single scheduler call.
pub const MAX_CATCH_UP_TICKS: u32 = 5;

/// Score gained per tick off the start row, in tenths of a point.
pub const SCORE_TENTHS_PER_TICK: u32 = 1;

/// Score span (whole points) of one difficulty level.
pub const DIFFICULTY_STEP: u32 = 50;

/// Lane surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneKind {
    /// Safe lane, never holds obstacles.
    Grass,
    /// Hazardous lane with moving obstacles.
    Road,
}

/// Travel direction of a road lane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    Left,
    Right,
}

impl Heading {
    /// Sign applied to a lane's speed magnitude.
    pub fn sign(&self) -> f32 {
        match self {
            Heading::Left => -1.0,
            Heading::Right => 1.0,
        }
    }
}

/// Character movement command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Parse a direction (case-insensitive). Anything else is `None`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Game actions produced by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Move(Direction),
    /// Leave the start or game-over screen.
    Start,
    /// Begin a fresh game from any phase.
    Restart,
}

/// Lifecycle of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// Not started (start screen).
    #[default]
    Idle,
    Running,
    /// Terminal; left only through a reset.
    Ended,
}

/// What happens to a pending top-edge wrap when the character moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WrapPolicy {
    /// Drop the wrap if the character is no longer on row 0 when it fires.
    #[default]
    CancelOnLeave,
    /// Always snap the row back, clobbering moves made in the meantime.
    Unconditional,
}

impl WrapPolicy {
    /// Parse `cancel` / `always` (plus the long names).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cancel" | "cancel-on-leave" => Some(WrapPolicy::CancelOnLeave),
            "always" | "unconditional" => Some(WrapPolicy::Unconditional),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WrapPolicy::CancelOnLeave => "cancel",
            WrapPolicy::Unconditional => "always",
        }
    }
}

/// Board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    pub rows: u16,
    pub cols: u16,
    pub grid_size: u16,
}

impl Board {
    pub const fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            grid_size: GRID_SIZE,
        }
    }

    pub fn canvas_width(&self) -> f32 {
        f32::from(self.cols) * f32::from(self.grid_size)
    }

    pub fn canvas_height(&self) -> f32 {
        f32::from(self.rows) * f32::from(self.grid_size)
    }

    /// Row the character starts on (bottom edge).
    pub fn start_row(&self) -> u16 {
        self.rows.saturating_sub(1)
    }

    /// Fixed lane pattern: both edges grass, otherwise even rows are road.
    pub fn lane_kind(&self, row: u16) -> LaneKind {
        if row == 0 || row == self.start_row() || row % 2 == 1 {
            LaneKind::Grass
        } else {
            LaneKind::Road
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(ROWS, COLS)
    }
}
