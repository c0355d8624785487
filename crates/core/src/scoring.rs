//! Scoring and difficulty rules.
//!
//! Score accrues per tick while the character is off the start row. It is kept
//! in integer tenths so that repeated 0.1 increments never drift.
//! Difficulty is a step function of the whole score and drives the speed and
//! spacing of obstacles in newly generated lanes.

use crate::types::DIFFICULTY_STEP;

/// Base obstacle speed magnitude (px/tick) at difficulty 0.
const BASE_SPEED: f32 = 2.0;
/// Speed added per difficulty level.
const SPEED_PER_LEVEL: f32 = 0.5;

/// Obstacle spacing (in cells) at difficulty 0.
const BASE_GAP_CELLS: f32 = 4.0;
const GAP_SHRINK_PER_LEVEL: f32 = 0.3;
/// Spacing never drops below this many cells.
const MIN_GAP_CELLS: f32 = 2.0;

/// Speed magnitude of every road lane generated at `level`.
pub fn obstacle_speed(level: u32) -> f32 {
    BASE_SPEED + level as f32 * SPEED_PER_LEVEL
}

/// Minimum spacing between consecutive obstacles, in cells.
pub fn obstacle_gap_cells(level: u32) -> f32 {
    (BASE_GAP_CELLS - level as f32 * GAP_SHRINK_PER_LEVEL).max(MIN_GAP_CELLS)
}

/// Difficulty level implied by a whole score.
pub fn difficulty_level(whole_score: u32) -> u32 {
    1 + whole_score / DIFFICULTY_STEP
}

/// Difficulty after a tick that left the score at `whole_score`.
///
/// The level is only re-derived when the score sits on a positive multiple of
/// the step; in between it keeps `current`.
pub fn difficulty_after(whole_score: u32, current: u32) -> u32 {
    if whole_score > 0 && whole_score % DIFFICULTY_STEP == 0 {
        difficulty_level(whole_score)
    } else {
        current
    }
}

/// Whole points shown to the player.
pub fn whole_score(score_tenths: u32) -> u32 {
    score_tenths / 10
}
