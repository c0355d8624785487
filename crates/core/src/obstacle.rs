//! Moving obstacles.

use crate::collision::Rect;
use crate::game_state::Character;
use crate::types::{LaneKind, OBSTACLE_HEIGHT, OBSTACLE_INSET, OBSTACLE_WIDTH};

/// A moving rectangle confined to one lane.
///
/// `x` is in pixels, `row` is the lane index. `speed` is signed px/tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f32,
    pub row: u16,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub lane_kind: LaneKind,
}

impl Obstacle {
    /// Standard 60x20 road obstacle.
    pub fn road(x: f32, row: u16, speed: f32) -> Self {
        Self {
            x,
            row,
            width: OBSTACLE_WIDTH,
            height: OBSTACLE_HEIGHT,
            speed,
            lane_kind: LaneKind::Road,
        }
    }

    /// Move one tick, wrapping to the opposite edge once fully off-canvas.
    ///
    /// Afterwards `x` lies in `[-width, canvas_width]`.
    pub fn advance(&mut self, canvas_width: f32) {
        self.x += self.speed;

        if self.speed > 0.0 && self.x > canvas_width {
            self.x = -self.width;
        } else if self.speed < 0.0 && self.x + self.width < 0.0 {
            self.x = canvas_width;
        }
    }

    pub fn rect(&self, grid_size: u16) -> Rect {
        Rect::new(
            self.x,
            f32::from(self.row) * f32::from(grid_size) + OBSTACLE_INSET,
            self.width,
            self.height,
        )
    }

    pub fn collides_with(&self, character: &Character, grid_size: u16) -> bool {
        self.rect(grid_size).overlaps(&character.rect(grid_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GRID_SIZE;

    const CANVAS_W: f32 = 400.0;

    #[test]
    fn test_advance_moves_by_speed() {
        let mut obs = Obstacle::road(100.0, 2, 2.5);
        obs.advance(CANVAS_W);
        assert_eq!(obs.x, 102.5);

        let mut obs = Obstacle::road(100.0, 2, -3.0);
        obs.advance(CANVAS_W);
        assert_eq!(obs.x, 97.0);
    }

    #[test]
    fn test_wraps_left_to_right() {
        let mut obs = Obstacle::road(399.0, 2, 2.0);
        obs.advance(CANVAS_W);
        assert_eq!(obs.x, -OBSTACLE_WIDTH);
    }

    #[test]
    fn test_exactly_at_edge_does_not_wrap() {
        let mut obs = Obstacle::road(398.0, 2, 2.0);
        obs.advance(CANVAS_W);
        assert_eq!(obs.x, CANVAS_W);
    }

    #[test]
    fn test_wraps_right_to_left() {
        let mut obs = Obstacle::road(-59.0, 2, -2.0);
        obs.advance(CANVAS_W);
        assert_eq!(obs.x, CANVAS_W);
    }

    #[test]
    fn test_positive_speed_stays_in_bounds() {
        let mut obs = Obstacle::road(-50.0, 4, 7.25);
        for _ in 0..5_000 {
            obs.advance(CANVAS_W);
            assert!(obs.x <= CANVAS_W, "x={} escaped right edge", obs.x);
            assert!(obs.x >= -obs.width);
        }
    }

    #[test]
    fn test_negative_speed_stays_in_bounds() {
        let mut obs = Obstacle::road(300.0, 4, -6.5);
        for _ in 0..5_000 {
            obs.advance(CANVAS_W);
            assert!(obs.x >= -obs.width, "x={} escaped left edge", obs.x);
            assert!(obs.x <= CANVAS_W);
        }
    }

    #[test]
    fn test_zero_speed_never_moves() {
        let mut obs = Obstacle::road(120.0, 2, 0.0);
        for _ in 0..100 {
            obs.advance(CANVAS_W);
        }
        assert_eq!(obs.x, 120.0);
    }

    #[test]
    fn test_collides_with_character_in_cell() {
        // Character at col 3 spans x 160..200; obstacle spans 150..210.
        let character = Character::at(3, 2);
        let obs = Obstacle::road(150.0, 2, 0.0);
        assert!(obs.collides_with(&character, GRID_SIZE));
    }

    #[test]
    fn test_touching_edge_is_not_a_collision() {
        let character = Character::at(3, 2);
        // Right edge of the obstacle meets the character's left edge (160).
        let left = Obstacle::road(100.0, 2, 0.0);
        assert_eq!(left.x + left.width, 160.0);
        assert!(!left.collides_with(&character, GRID_SIZE));

        // Left edge meets the character's right edge (200).
        let right = Obstacle::road(200.0, 2, 0.0);
        assert!(!right.collides_with(&character, GRID_SIZE));

        // One pixel further in does collide.
        let inside = Obstacle::road(199.0, 2, 0.0);
        assert!(inside.collides_with(&character, GRID_SIZE));
    }

    #[test]
    fn test_other_row_does_not_collide() {
        let character = Character::at(3, 4);
        let obs = Obstacle::road(150.0, 2, 0.0);
        assert!(!obs.collides_with(&character, GRID_SIZE));
    }
}
