//! Lanes and the lane generator.
//!
//! The lane pattern is fixed per board (see [`Board::lane_kind`]); only road
//! attributes are random: each road lane gets a heading, and its obstacles get
//! jittered spacing. Speed and density are deterministic functions of the
//! difficulty level.

use rand::Rng;

use crate::obstacle::Obstacle;
use crate::rng::{pick_heading, spacing_jitter};
use crate::scoring::{obstacle_gap_cells, obstacle_speed};
use crate::types::{Board, Heading, LaneKind, OBSTACLE_START_X, OBSTACLE_TAIL_PX};

/// One horizontal row of the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    pub kind: LaneKind,
    /// Travel direction, road lanes only.
    pub heading: Option<Heading>,
    /// Signed px/tick shared by every obstacle of the lane (0 on grass).
    pub speed: f32,
    pub obstacles: Vec<Obstacle>,
}

impl Lane {
    pub fn grass() -> Self {
        Self {
            kind: LaneKind::Grass,
            heading: None,
            speed: 0.0,
            obstacles: Vec::new(),
        }
    }

    /// Empty road lane; `speed` is a magnitude, signed by `heading`.
    pub fn road(heading: Heading, speed: f32) -> Self {
        Self {
            kind: LaneKind::Road,
            heading: Some(heading),
            speed: heading.sign() * speed,
            obstacles: Vec::new(),
        }
    }

    /// Advance every obstacle in the lane by one tick.
    pub fn advance(&mut self, canvas_width: f32) {
        for obs in &mut self.obstacles {
            obs.advance(canvas_width);
        }
    }

    pub fn is_road(&self) -> bool {
        self.kind == LaneKind::Road
    }
}

/// Build the lane set for a new game at `difficulty_level`.
///
/// Headings for all road lanes are drawn first, top to bottom, then each road
/// lane is populated left to right: one obstacle every `gap` cells plus up to
/// one cell of jitter, starting off-canvas at `x = -50` and stopping once `x`
/// reaches `canvas_width + 50`.
pub fn generate_lanes<R: Rng + ?Sized>(
    board: &Board,
    difficulty_level: u32,
    rng: &mut R,
) -> Vec<Lane> {
    let speed = obstacle_speed(difficulty_level);

    let mut lanes: Vec<Lane> = (0..board.rows)
        .map(|row| match board.lane_kind(row) {
            LaneKind::Grass => Lane::grass(),
            LaneKind::Road => Lane::road(pick_heading(rng), speed),
        })
        .collect();

    let grid = f32::from(board.grid_size);
    let gap = obstacle_gap_cells(difficulty_level);
    let end_x = board.canvas_width() + OBSTACLE_TAIL_PX;

    for (row, lane) in lanes.iter_mut().enumerate() {
        if !lane.is_road() {
            continue;
        }

        let mut x = OBSTACLE_START_X;
        while x < end_x {
            lane.obstacles.push(Obstacle::road(x, row as u16, lane.speed));
            x += grid * gap + spacing_jitter(rng, board.grid_size);
        }
    }

    lanes
}
