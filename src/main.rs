//! Terminal Blockfall runner (default binary).
//!
//! This is the host around the engine: it owns the clock, polls crossterm for
//! input until the next gravity tick is due, applies actions and ticks
//! serially, and redraws after every pass.

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};

use blockfall::config::Config;
use blockfall::core::{Clock, TickSchedule};
use blockfall::engine::{Engine, GameSnapshot, LockEvent};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::logging;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

/// Wall-clock milliseconds since the host started.
struct SystemClock {
    start: Instant,
}

impl SystemClock {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

fn main() -> Result<()> {
    let config = Config::parse();
    let _log_handle = logging::init(&config)?;

    let seed = config.seed_or_random();
    info!("starting: seed {}, tick {}ms", seed, config.tick_ms);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &Config, seed: u32) -> Result<()> {
    let clock = SystemClock::new();
    let mut schedule = TickSchedule::from_clock(config.tick_ms, &clock);
    let mut engine = Engine::new(seed);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    loop {
        engine.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = Duration::from_millis(schedule.until_next_ms(clock.now_ms()));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!("quit: score {}, lines {}", engine.score(), engine.lines());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        engine.apply_action(action);
                        drain_event(&mut engine);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        for _ in 0..schedule.poll_clock(&clock) {
            engine.tick();
            drain_event(&mut engine);
        }
    }
}

/// Only the latest lock is retained, so this runs after every engine step.
fn drain_event(engine: &mut Engine) {
    if let Some(ev) = engine.take_last_event() {
        report(&ev, engine.score());
    }
}

fn report(ev: &LockEvent, score: u32) {
    if ev.lines_cleared > 0 {
        debug!("cleared {} lines, score now {}", ev.lines_cleared, score);
    }
}
