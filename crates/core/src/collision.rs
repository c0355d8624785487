//! Axis-aligned bounding-box collision.
//!
//! Only the obstacles of the character's own lane are tested; overlap is strict,
//! so rectangles that merely share an edge do not collide.

use crate::game_state::Character;
use crate::lanes::Lane;
use crate::types::LaneKind;

/// Pixel-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Strict overlap on both axes.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Index of the first obstacle in `lane` hitting the character.
///
/// Grass lanes never collide.
pub fn first_collision(lane: &Lane, character: &Character, grid_size: u16) -> Option<usize> {
    if lane.kind != LaneKind::Road {
        return None;
    }

    lane.obstacles
        .iter()
        .position(|obs| obs.collides_with(character, grid_size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obstacle::Obstacle;
    use crate::types::{Heading, GRID_SIZE};

    #[test]
    fn test_overlap_basic() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_shared_edge_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
    }

    #[test]
    fn test_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(50.0, 50.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_first_collision_in_road_lane() {
        let character = Character::at(3, 2);
        let mut lane = Lane::road(Heading::Right, 0.0);
        lane.obstacles.push(Obstacle::road(-50.0, 2, 0.0));
        lane.obstacles.push(Obstacle::road(150.0, 2, 0.0));
        lane.obstacles.push(Obstacle::road(170.0, 2, 0.0));

        assert_eq!(first_collision(&lane, &character, GRID_SIZE), Some(1));
    }

    #[test]
    fn test_grass_lane_never_collides() {
        let character = Character::at(3, 1);
        let mut lane = Lane::grass();
        // A stray obstacle in a grass lane is ignored.
        lane.obstacles.push(Obstacle::road(150.0, 1, 0.0));

        assert_eq!(first_collision(&lane, &character, GRID_SIZE), None);
    }
}
