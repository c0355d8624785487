//! Random source helpers.
//!
//! Lane generation is generic over [`rand::Rng`] so callers can inject any
//! source: a seeded [`GameRng`] for reproducible games, or a mock such as
//! `rand::rngs::mock::StepRng` to pin exact obstacle placement in tests.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::types::Heading;

/// Default generator for games.
pub type GameRng = SmallRng;

/// Create a game RNG from a seed. Same seed, same lanes.
pub fn seeded(seed: u64) -> GameRng {
    SmallRng::seed_from_u64(seed)
}

/// Fresh seed from the thread-local generator.
pub fn random_seed() -> u64 {
    rand::random()
}

/// Pick a lane heading with equal probability.
pub fn pick_heading<R: Rng + ?Sized>(rng: &mut R) -> Heading {
    if rng.gen_bool(0.5) {
        Heading::Right
    } else {
        Heading::Left
    }
}

/// Extra spacing in `[0, grid_size)` pixels.
pub fn spacing_jitter<R: Rng + ?Sized>(rng: &mut R, grid_size: u16) -> f32 {
    rng.gen::<f32>() * f32::from(grid_size)
}
