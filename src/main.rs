//! Terminal block-fall runner (default binary).
//!
//! Fixed-rate loop: key presses are buffered between ticks, each tick feeds
//! them to the simulation, advances gravity once and redraws. Logging goes to
//! stderr (`RUST_LOG=debug tui-blockfall 2> blockfall.log`) so it never mixes
//! with the alternate screen.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use log::{debug, info, trace};

use tui_blockfall::core::{BoardSimulation, GameConfig, GameSnapshot};
use tui_blockfall::input::{action_for_key, InputQueue};
use tui_blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let config = GameConfig::default();
    config.validate().context("invalid game configuration")?;

    let seed = clock_seed();
    info!(
        "starting {}x{} board at {} ticks/s, seed {}",
        config.board.cols, config.board.rows, config.ticks_per_second, seed
    );
    let sim = BoardSimulation::with_seed(config.board, seed).context("failed to build the board")?;

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to set up the terminal")?;

    let result = run(&mut term, sim, config.tick_duration());

    // Always try to restore terminal state.
    let restored = term.exit().context("failed to restore the terminal");
    result?;
    restored
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, mut sim: BoardSimulation, tick: Duration) -> Result<()> {
    let view = GameView::default();
    let mut queue = InputQueue::new();
    let mut snap = sim.snapshot();
    let mut fb = FrameBuffer::new(0, 0);

    draw(term, &view, &snap, &mut fb)?;
    let mut next_tick = Instant::now() + tick;

    loop {
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(action) = action_for_key(key) {
                        if !queue.push(action) {
                            debug!("input queue full, dropped {:?}", action);
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    draw(term, &view, &snap, &mut fb)?;
                }
                _ => {}
            }
        }

        let now = Instant::now();
        if now < next_tick {
            continue;
        }
        next_tick = next_deadline(next_tick, tick, now);

        let outcome = sim.step(&queue.drain());
        trace!("tick {}: {:?}", sim.ticks(), outcome);

        sim.snapshot_into(&mut snap);
        draw(term, &view, &snap, &mut fb)?;

        if sim.is_finished() {
            break;
        }
    }

    if sim.is_game_over() && !sim.quit_requested() {
        wait_for_key()?;
    }
    info!(
        "session over: {} lines, {} pieces, {} ticks",
        sim.lines_cleared(),
        sim.pieces_locked(),
        sim.ticks()
    );
    Ok(())
}

/// Deadline for the tick after the one due at `due`.
///
/// After a stall (suspended terminal, slow redraw) ticks are not replayed to
/// catch up: the schedule restarts one full tick from `now`.
fn next_deadline(due: Instant, tick: Duration, now: Instant) -> Instant {
    let next = due + tick;
    if next <= now {
        now + tick
    } else {
        next
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    snap: &GameSnapshot,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = terminal::size().unwrap_or((80, 24));
    view.render_into(snap, Viewport::new(w, h), fb);
    term.present(fb)
}

/// Block until a fresh key press, ignoring anything typed before the overlay.
fn wait_for_key() -> Result<()> {
    while event::poll(Duration::ZERO)? {
        event::read()?;
    }
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Release {
                return Ok(());
            }
        }
    }
}
