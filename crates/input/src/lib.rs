//! Terminal input module (engine-facing).
//!
//! Independent of any UI framework: maps `crossterm` key events into
//! [`crate::types::GameAction`] and turns mouse drags into swipe moves, the
//! terminal counterpart of touch swipes.

pub mod map;
pub mod swipe;

pub use crossy_types as types;

pub use map::{handle_key_event, should_quit};
pub use swipe::{swipe_direction, SwipeTracker, DEFAULT_SWIPE_THRESHOLD};
