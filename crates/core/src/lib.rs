//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole simulation of the lane-crossing game: lane and
//! obstacle generation, per-tick obstacle motion, collision, scoring, difficulty
//! and the game lifecycle. It has **no dependencies** on UI, terminals or I/O:
//!
//! - **Deterministic**: the random source is injected, so a seed (or a mock
//!   generator) reproduces exact lane layouts
//! - **Testable**: every rule is exercised without a display
//! - **Portable**: a renderer only needs a [`GameSnapshot`]
//!
//! # Module Structure
//!
//! - [`obstacle`]: moving rectangles that wrap around the canvas
//! - [`lanes`]: grass/road lanes and the lane generator
//! - [`collision`]: strict AABB overlap against the character's lane
//! - [`game_state`]: lifecycle, tick, scheduler and character moves
//! - [`scoring`]: score increments and the difficulty step function
//! - [`rng`]: seeded generators and random draws used by generation
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - Row 0 and the bottom row are grass; in between, even rows are road
//! - Road lanes move left or right at `2 + level * 0.5` px/tick
//! - Touching an obstacle in the character's own road lane ends the game
//! - Every tick off the start row is worth 0.1 points
//! - Difficulty is `1 + floor(score / 50)`; it raises the reported speed base,
//!   but lanes are only generated on reset, which starts again at level 1
//! - Reaching row 0 sends the character back to the start row after 100ms
//!
//! # Example
//!
//! ```
//! use crossy_core::{GameState, TickOutcome};
//! use crossy_types::{Direction, GamePhase};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.phase(), GamePhase::Idle);
//!
//! game.start();
//! assert!(game.apply_move(Direction::Left));
//!
//! // Still on the start row, which is always grass.
//! assert_eq!(game.tick(), TickOutcome::Continue);
//! assert_eq!(game.score(), 0.0);
//! ```
//!
//! # Timing
//!
//! Call [`GameState::advance`] every frame with the elapsed milliseconds; it
//! runs fixed 16ms ticks and fires the delayed top-edge wrap. [`GameState::tick`]
//! runs exactly one step.

pub mod collision;
pub mod game_state;
pub mod lanes;
pub mod obstacle;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use crossy_types as types;

// Re-export commonly used types for convenience
pub use collision::{first_collision, Rect};
pub use game_state::{
    Character, GameEvent, GameState, TickOutcome, EVENT_CAPACITY, MAX_PENDING_WRAPS,
};
pub use lanes::{generate_lanes, Lane};
pub use obstacle::Obstacle;
pub use rng::{random_seed, seeded, GameRng};
pub use scoring::{difficulty_level, obstacle_gap_cells, obstacle_speed};
pub use snapshot::GameSnapshot;
