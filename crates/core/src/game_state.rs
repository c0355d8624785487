//! Game state module - manages the complete game state
//!
//! Ties together lanes, the character, scoring and difficulty. It owns the
//! game lifecycle (`Idle -> Running -> Ended`), the per-frame simulation step,
//! character moves, and the delayed top-edge wrap.

use arrayvec::ArrayVec;
use rand::Rng;

use crate::collision::{first_collision, Rect};
use crate::lanes::{generate_lanes, Lane};
use crate::rng::{seeded, GameRng};
use crate::scoring::{difficulty_after, obstacle_speed, whole_score};
use crate::snapshot::GameSnapshot;
use crate::types::*;

/// Capacity of the pending event queue.
pub const EVENT_CAPACITY: usize = 16;

/// Wraps that can be in flight at once under [`WrapPolicy::Unconditional`].
pub const MAX_PENDING_WRAPS: usize = 8;

/// The player-controlled character, addressed by grid cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Character {
    pub col: u16,
    pub row: u16,
    pub width: f32,
    pub height: f32,
}

impl Character {
    pub fn at(col: u16, row: u16) -> Self {
        Self {
            col,
            row,
            width: CHARACTER_SIZE,
            height: CHARACTER_SIZE,
        }
    }

    /// Pixel-space box: the cell inset by 10px.
    pub fn rect(&self, grid_size: u16) -> Rect {
        let grid = f32::from(grid_size);
        Rect::new(
            f32::from(self.col) * grid + CHARACTER_INSET,
            f32::from(self.row) * grid + CHARACTER_INSET,
            self.width,
            self.height,
        )
    }
}

impl Default for Character {
    fn default() -> Self {
        Self::at(START_COL, Board::default().start_row())
    }
}

/// Result of a simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing was simulated.
    Inactive,
    Continue,
    /// The character was hit; the game is now `Ended`.
    GameOver { final_score: u32 },
}

/// Notable state transitions, drained by the shell (logging, UI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started { episode_id: u32 },
    /// The delayed wrap moved the character back to the start row.
    WrappedToStart,
    /// The character left row 0 before the wrap fired.
    WrapCancelled,
    DifficultyRaised { level: u32 },
    GameOver { final_score: u32, difficulty_level: u32 },
}

/// Complete game state.
///
/// Generic over the random source used for lane generation.
#[derive(Debug, Clone)]
pub struct GameState<R = GameRng> {
    board: Board,
    rng: R,
    lanes: Vec<Lane>,
    character: Character,
    /// Score in tenths of a point.
    score_tenths: u32,
    difficulty_level: u32,
    phase: GamePhase,
    wrap_policy: WrapPolicy,
    /// Time left on each scheduled snap back from row 0, soonest first.
    pending_wraps: ArrayVec<u32, MAX_PENDING_WRAPS>,
    tick_ms: u32,
    tick_accumulator_ms: u32,
    /// Ticks simulated in the current episode.
    ticks: u64,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    events: ArrayVec<GameEvent, EVENT_CAPACITY>,
}

impl GameState<GameRng> {
    /// Create an idle game on the default board with the given RNG seed.
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Board::default(), seeded(seed))
    }
}

impl Default for GameState<GameRng> {
    fn default() -> Self {
        Self::new(1)
    }
}

impl<R: Rng> GameState<R> {
    /// Create an idle game on `board`, drawing lane layouts from `rng`.
    ///
    /// Lanes are generated immediately so there is a board to show behind the
    /// start screen.
    pub fn with_rng(board: Board, mut rng: R) -> Self {
        let lanes = generate_lanes(&board, 1, &mut rng);
        Self {
            board,
            rng,
            lanes,
            character: Character::at(start_col(&board), board.start_row()),
            score_tenths: 0,
            difficulty_level: 1,
            phase: GamePhase::Idle,
            wrap_policy: WrapPolicy::default(),
            pending_wraps: ArrayVec::new(),
            tick_ms: TICK_MS,
            tick_accumulator_ms: 0,
            ticks: 0,
            episode_id: 0,
            events: ArrayVec::new(),
        }
    }

    pub fn with_wrap_policy(mut self, policy: WrapPolicy) -> Self {
        self.wrap_policy = policy;
        self
    }

    /// Override the fixed timestep used by [`GameState::advance`].
    pub fn with_tick_ms(mut self, tick_ms: u32) -> Self {
        self.tick_ms = tick_ms.max(1);
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn score(&self) -> f64 {
        f64::from(self.score_tenths) / 10.0
    }

    /// Score as shown to the player (floored).
    pub fn display_score(&self) -> u32 {
        whole_score(self.score_tenths)
    }

    pub fn difficulty_level(&self) -> u32 {
        self.difficulty_level
    }

    /// Obstacle speed magnitude for the current difficulty.
    pub fn speed_base(&self) -> f32 {
        obstacle_speed(self.difficulty_level)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn wrap_pending(&self) -> bool {
        !self.pending_wraps.is_empty()
    }

    pub fn wrap_policy(&self) -> WrapPolicy {
        self.wrap_policy
    }

    pub fn tick_ms(&self) -> u32 {
        self.tick_ms
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Install a hand-built lane set, e.g. for scripted scenarios.
    ///
    /// Lanes are indexed by row; missing rows behave as grass.
    pub fn replace_lanes(&mut self, lanes: Vec<Lane>) {
        self.lanes = lanes;
    }

    /// Take queued events, oldest first.
    pub fn drain_events(&mut self) -> arrayvec::Drain<'_, GameEvent, EVENT_CAPACITY> {
        self.events.drain(..)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board = self.board;
        out.lanes.clone_from(&self.lanes);
        out.character = self.character;
        out.score = self.score();
        out.display_score = self.display_score();
        out.difficulty_level = self.difficulty_level;
        out.phase = self.phase;
        out.wrap_pending = self.wrap_pending();
        out.episode_id = self.episode_id;
        out.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Prepare a fresh game and leave it idle (pre-running).
    pub fn reset(&mut self) {
        self.score_tenths = 0;
        self.difficulty_level = 1;
        self.character = Character::at(start_col(&self.board), self.board.start_row());
        self.lanes = generate_lanes(&self.board, self.difficulty_level, &mut self.rng);
        self.pending_wraps.clear();
        self.tick_accumulator_ms = 0;
        self.ticks = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.phase = GamePhase::Idle;
    }

    /// Leave the start or game-over screen: reset and run.
    ///
    /// Returns false if a game is already running.
    pub fn start(&mut self) -> bool {
        if self.phase == GamePhase::Running {
            return false;
        }
        self.run_fresh();
        true
    }

    /// Reset and run regardless of the current phase.
    pub fn restart(&mut self) {
        self.run_fresh();
    }

    fn run_fresh(&mut self) {
        self.reset();
        self.phase = GamePhase::Running;
        self.push_event(GameEvent::Started {
            episode_id: self.episode_id,
        });
    }

    /// Stop the game and return the final (floored) score.
    pub fn end(&mut self) -> u32 {
        let final_score = self.display_score();
        if self.phase != GamePhase::Running {
            return final_score;
        }

        self.phase = GamePhase::Ended;
        self.pending_wraps.clear();
        self.tick_accumulator_ms = 0;
        self.push_event(GameEvent::GameOver {
            final_score,
            difficulty_level: self.difficulty_level,
        });
        final_score
    }

    /// One simulation step (one frame).
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != GamePhase::Running {
            return TickOutcome::Inactive;
        }
        self.ticks = self.ticks.wrapping_add(1);

        let canvas_width = self.board.canvas_width();
        for lane in &mut self.lanes {
            lane.advance(canvas_width);
        }

        // Only the character's own lane can hit it.
        if let Some(lane) = self.lanes.get(usize::from(self.character.row)) {
            if first_collision(lane, &self.character, self.board.grid_size).is_some() {
                let final_score = self.end();
                return TickOutcome::GameOver { final_score };
            }
        }

        if self.character.row < self.board.start_row() {
            self.score_tenths = self.score_tenths.saturating_add(SCORE_TENTHS_PER_TICK);
        }

        let level = difficulty_after(self.display_score(), self.difficulty_level);
        if level != self.difficulty_level {
            self.difficulty_level = level;
            self.push_event(GameEvent::DifficultyRaised { level });
        }

        TickOutcome::Continue
    }

    /// Scheduler entry point: account for `elapsed_ms` of wall time.
    ///
    /// Runs as many fixed ticks as the accumulated time allows (at most
    /// `MAX_CATCH_UP_TICKS`; excess whole ticks are dropped). A wrap whose
    /// delay runs out between two ticks fires between them, and one that is
    /// due exactly on a tick fires before it.
    pub fn advance(&mut self, elapsed_ms: u32) -> TickOutcome {
        if self.phase != GamePhase::Running {
            return TickOutcome::Inactive;
        }

        let mut left = elapsed_ms;
        let mut ran = 0;
        while ran < MAX_CATCH_UP_TICKS {
            let to_tick = self.tick_ms.saturating_sub(self.tick_accumulator_ms);
            if to_tick > left {
                break;
            }
            left -= to_tick;
            self.tick_accumulator_ms = 0;
            self.elapse_wraps(to_tick);
            ran += 1;
            if let over @ TickOutcome::GameOver { .. } = self.tick() {
                return over;
            }
        }

        // Wraps still see the time of ticks dropped by the cap.
        self.elapse_wraps(left);
        self.tick_accumulator_ms = (self.tick_accumulator_ms + left % self.tick_ms) % self.tick_ms;

        TickOutcome::Continue
    }

    /// Count `ms` off every pending wrap and fire the ones that ran out.
    fn elapse_wraps(&mut self, ms: u32) {
        let mut due = 0;
        for remaining in &mut self.pending_wraps {
            if *remaining <= ms {
                due += 1;
            } else {
                *remaining -= ms;
            }
        }
        // Deadlines are kept in order, so the due ones are a prefix.
        for _ in 0..due {
            self.pending_wraps.remove(0);
            self.character.row = self.board.start_row();
            self.push_event(GameEvent::WrappedToStart);
        }
    }

    fn schedule_wrap(&mut self) {
        match self.wrap_policy {
            WrapPolicy::CancelOnLeave => {
                self.pending_wraps.clear();
                self.pending_wraps.push(WRAP_DELAY_MS);
            }
            WrapPolicy::Unconditional => {
                if self.pending_wraps.is_full() {
                    self.pending_wraps.remove(0);
                }
                self.pending_wraps.push(WRAP_DELAY_MS);
            }
        }
    }

    /// Move the character one cell. No-op when not running or blocked by an edge.
    ///
    /// Moving up into row 0 schedules the delayed wrap back to the start row.
    /// Under [`WrapPolicy::CancelOnLeave`] moving down off row 0 cancels it;
    /// under [`WrapPolicy::Unconditional`] every arrival gets its own wrap and
    /// each one fires.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }

        let last_col = self.board.cols.saturating_sub(1);
        let last_row = self.board.start_row();
        let c = &mut self.character;

        let moved = match direction {
            Direction::Left if c.col > 0 => {
                c.col -= 1;
                true
            }
            Direction::Right if c.col < last_col => {
                c.col += 1;
                true
            }
            Direction::Down if c.row < last_row => {
                c.row += 1;
                true
            }
            Direction::Up if c.row > 0 => {
                c.row -= 1;
                true
            }
            _ => false,
        };

        if !moved {
            return false;
        }

        if direction == Direction::Up && self.character.row == 0 {
            self.schedule_wrap();
        } else if self.character.row != 0
            && self.wrap_pending()
            && self.wrap_policy == WrapPolicy::CancelOnLeave
        {
            self.pending_wraps.clear();
            self.push_event(GameEvent::WrapCancelled);
        }

        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction),
            GameAction::Start => self.start(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    fn push_event(&mut self, event: GameEvent) {
        // Shells drain every frame; on overflow the oldest event is evicted.
        if self.events.is_full() {
            self.events.remove(0);
        }
        self.events.push(event);
    }
}

fn start_col(board: &Board) -> u16 {
    START_COL.min(board.cols.saturating_sub(1))
}
