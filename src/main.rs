//! Terminal crossing-game runner (default binary).
//!
//! Input comes from crossterm (keys, plus mouse drags when enabled) and frames
//! go through the framebuffer renderer. Game time is driven by wall-clock
//! milliseconds handed to `GameState::advance`, settled once per frame and
//! before every input event.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use crossy::clock::GameClock;
use crossy::config::{parse_args, RunConfig, USAGE};
use crossy::core::{random_seed, GameSnapshot, GameState};
use crossy::event_log::EventLog;
use crossy::input::{handle_key_event, should_quit, SwipeTracker};
use crossy::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(config) = parse_args(&args, RunConfig::from_env())? else {
        print!("{}", USAGE);
        return Ok(());
    };

    let mut log = match config.log_path.as_deref() {
        Some(path) => EventLog::open(path)?,
        None => EventLog::disabled(),
    };

    let mut term = TerminalRenderer::new().with_mouse(config.mouse);
    term.enter()?;

    let result = run(&mut term, &config, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();

    log.flush();
    if let Some(err) = log.error() {
        eprintln!("[EventLog] disabled: {}", err);
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &RunConfig, log: &mut EventLog) -> Result<()> {
    let seed = config.seed.unwrap_or_else(random_seed);
    log.record_session(seed, config.wrap_policy);

    let mut game = GameState::new(seed)
        .with_wrap_policy(config.wrap_policy)
        .with_tick_ms(config.tick_ms);

    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut swipe = SwipeTracker::new();

    let frame = Duration::from_millis(u64::from(config.tick_ms));
    let mut clock = GameClock::new(Instant::now());
    let mut next_frame = Instant::now() + frame;
    let mut drawn: Option<(u64, Viewport)> = None;

    loop {
        // Render only when something visible changed.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let key = (snap.fingerprint(), viewport);
        if drawn != Some(key) {
            view.render_into(&snap, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            drawn = Some(key);
        }

        // Input with timeout until the next frame.
        let timeout = next_frame.saturating_duration_since(Instant::now());

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.advance(clock.take_elapsed_ms(Instant::now()));
                        game.apply_action(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(direction) = swipe.handle_mouse(mouse) {
                        game.advance(clock.take_elapsed_ms(Instant::now()));
                        game.apply_move(direction);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    drawn = None;
                }
                _ => {}
            }
        }

        // Advance game time.
        let now = Instant::now();
        if now >= next_frame {
            next_frame = now + frame;
            game.advance(clock.take_elapsed_ms(now));
        }

        let episode = game.episode_id();
        for ev in game.drain_events() {
            log.record(episode, &ev);
        }
    }
}
