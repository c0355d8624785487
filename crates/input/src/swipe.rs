//! Swipe gestures: a press/release pair turned into one move.
//!
//! The dominant axis wins; a gesture shorter than the threshold on that axis is
//! ignored. In a terminal the gesture is a mouse drag measured in cells.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::Direction;

/// Drag distance (in terminal cells) a swipe must exceed.
pub const DEFAULT_SWIPE_THRESHOLD: i32 = 2;

/// Classify a gesture delta. `dy < 0` is upwards.
pub fn swipe_direction(dx: i32, dy: i32, threshold: i32) -> Option<Direction> {
    if dx.abs() > dy.abs() {
        if dx > threshold {
            Some(Direction::Right)
        } else if dx < -threshold {
            Some(Direction::Left)
        } else {
            None
        }
    } else if dy < -threshold {
        Some(Direction::Up)
    } else if dy > threshold {
        Some(Direction::Down)
    } else {
        None
    }
}

/// Tracks a left-button drag across mouse events.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    origin: Option<(u16, u16)>,
    threshold: i32,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_SWIPE_THRESHOLD)
    }

    pub fn with_threshold(threshold: i32) -> Self {
        Self {
            origin: None,
            threshold,
        }
    }

    /// Feed a mouse event; returns a direction when a drag completes.
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Option<Direction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.origin = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let (x0, y0) = self.origin.take()?;
                let dx = i32::from(event.column) - i32::from(x0);
                let dy = i32::from(event.row) - i32::from(y0);
                swipe_direction(dx, dy, self.threshold)
            }
            _ => None,
        }
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}
