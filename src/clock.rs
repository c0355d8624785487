//! Wall-clock to game-time bookkeeping for the runner.
//!
//! `GameState::advance` takes whole milliseconds. The runner settles the clock
//! before applying every input event as well as once per frame, so time that
//! passed before a move is simulated before it and a wrap scheduled by the
//! move starts counting at the move.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct GameClock {
    /// Wall time already handed to the game.
    consumed: Instant,
}

impl GameClock {
    pub fn new(now: Instant) -> Self {
        Self { consumed: now }
    }

    /// Whole milliseconds owed to the game at `now`; marks them consumed.
    ///
    /// The sub-millisecond remainder carries over to the next call. A `now`
    /// earlier than the last call yields 0.
    pub fn take_elapsed_ms(&mut self, now: Instant) -> u32 {
        let owed = now.saturating_duration_since(self.consumed).as_millis();
        let ms = u32::try_from(owed).unwrap_or(u32::MAX);
        self.consumed += Duration::from_millis(u64::from(ms));
        ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn micros(us: u64) -> Duration {
        Duration::from_micros(us)
    }

    #[test]
    fn test_whole_millis_with_carry() {
        let t0 = Instant::now();
        let mut clock = GameClock::new(t0);

        assert_eq!(clock.take_elapsed_ms(t0 + micros(10_700)), 10);
        // 0.7ms carried: 10.7 -> 20.0 is 9.3ms, but 10 whole ms are owed.
        assert_eq!(clock.take_elapsed_ms(t0 + micros(20_000)), 10);
        assert_eq!(clock.take_elapsed_ms(t0 + micros(20_999)), 0);
        assert_eq!(clock.take_elapsed_ms(t0 + micros(21_000)), 1);
    }

    #[test]
    fn test_earlier_instant_yields_zero() {
        let t0 = Instant::now();
        let mut clock = GameClock::new(t0 + micros(5_000));
        assert_eq!(clock.take_elapsed_ms(t0), 0);
        assert_eq!(clock.take_elapsed_ms(t0 + micros(6_000)), 1);
    }
}
