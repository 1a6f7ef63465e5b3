//! The game loop.

use anyhow::{Context, Result};
use log::{debug, info};

use crate::core::{Game, Grid, TickEvents};
use crate::guard::with_raw_mode;
use crate::ports::{FrameSink, InputSource, Scheduler, TerminalMode};
use crate::types::{EndReason, GameAction};

/// Result of one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub score: u32,
    pub reason: EndReason,
    /// Loop iterations, countdown included.
    pub ticks: u64,
}

/// Drive `game` until it is over.
///
/// Per tick: poll one key, advance the game, render, wait. The frame for the
/// final tick (the game-over summary) is rendered before returning.
pub fn run_session<I, S, C>(
    game: &mut Game,
    input: &mut I,
    sink: &mut S,
    scheduler: &mut C,
) -> Result<RunSummary>
where
    I: InputSource + ?Sized,
    S: FrameSink + ?Sized,
    C: Scheduler + ?Sized,
{
    info!(
        "session start: variant={} seed={}",
        game.world().config().variant.as_str(),
        game.seed()
    );

    sink.clear_screen().context("clear screen")?;
    let mut grid = Grid::from_world(game.world());
    let mut ticks = 0u64;

    loop {
        let action = input
            .poll_key()
            .context("poll input")?
            .and_then(GameAction::from_key);
        let events = game.tick(action);
        ticks += 1;
        log_events(game, &events);

        grid.fill_from(game.world());
        sink.write_frame(&grid, &game.status_line()).context("write frame")?;

        if let Some(reason) = game.end_reason() {
            let summary = RunSummary {
                score: game.score(),
                reason,
                ticks,
            };
            info!(
                "session end: reason={} score={} ticks={}",
                reason.as_str(),
                summary.score,
                summary.ticks
            );
            return Ok(summary);
        }

        scheduler.wait_next_tick();
    }
}

/// One run with raw mode held for its whole duration.
pub fn play_once<M, I, S, C>(
    mode: &mut M,
    game: &mut Game,
    input: &mut I,
    sink: &mut S,
    scheduler: &mut C,
) -> Result<RunSummary>
where
    M: TerminalMode + ?Sized,
    I: InputSource + ?Sized,
    S: FrameSink + ?Sized,
    C: Scheduler + ?Sized,
{
    with_raw_mode(mode, || run_session(game, input, sink, scheduler))
}

fn log_events(game: &Game, events: &TickEvents) {
    let world = game.world();
    if let Some(kind) = events.spawned {
        debug!("frame {}: spawned {}", world.frame_count(), kind.as_str());
    }
    if events.difficulty.any() {
        debug!(
            "score {}: obstacle speed {:.1}, spawn interval {}",
            world.score(),
            world.difficulty().speed(),
            world.difficulty().frequency()
        );
    }
    if events.collided {
        debug!("frame {}: collision", world.frame_count());
    }
}
