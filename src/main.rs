//! Terminal demo driver (default binary).
//!
//! Owns the tick loop the core expects: poll input until the next tick
//! boundary, feed the engine at most one latched event per tick, hand the
//! returned snapshot to the renderer.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::PanelEngine;
use blockfall::input::{should_quit, should_reset, InputLatch};
use blockfall::term::TerminalRenderer;
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    // The firmware variants harvest timer bits on key presses for the seed;
    // wall-clock nanoseconds stand in for that here.
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1);
    let mut engine = PanelEngine::with_seed(seed);
    let mut latch = InputLatch::new();

    let tick_duration = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if should_reset(key) {
                        engine.reset();
                        latch.take();
                        continue;
                    }
                    latch.press(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            let snapshot = engine.tick(latch.take());
            term.draw(snapshot)?;
        }
    }
}
