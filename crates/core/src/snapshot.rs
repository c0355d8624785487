use crate::game_state::Character;
use crate::lanes::Lane;
use crate::types::{Board, GamePhase};

/// Read-only view of a game for renderers and loggers.
///
/// Reuse one instance with [`GameState::snapshot_into`](crate::GameState::snapshot_into)
/// to keep lane storage allocated across frames.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameSnapshot {
    pub board: Board,
    pub lanes: Vec<Lane>,
    pub character: Character,
    pub score: f64,
    pub display_score: u32,
    pub difficulty_level: u32,
    pub phase: GamePhase,
    pub wrap_pending: bool,
    pub episode_id: u32,
    pub ticks: u64,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Cheap fingerprint of what is on screen, for redraw decisions.
    pub fn fingerprint(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325;
        let mut mix = |v: u64| {
            h ^= v;
            h = h.wrapping_mul(0x0000_0100_0000_01b3);
        };

        mix(u64::from(self.character.col));
        mix(u64::from(self.character.row));
        mix(u64::from(self.display_score));
        mix(u64::from(self.difficulty_level));
        mix(self.phase as u64);
        for lane in &self.lanes {
            for obs in &lane.obstacles {
                mix(u64::from(obs.x.to_bits()));
            }
        }
        h
    }
}
