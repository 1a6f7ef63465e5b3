//! Collaborator interfaces the loop is driven through.

use anyhow::Result;

use crate::core::Grid;

/// Non-blocking keyboard source.
pub trait InputSource {
    /// At most one pending key, or `None` when nothing is buffered.
    fn poll_key(&mut self) -> Result<Option<char>>;
}

/// Whole-frame output.
pub trait FrameSink {
    fn clear_screen(&mut self) -> Result<()>;

    /// Draw a fully computed frame: the lane grid plus one status line.
    fn write_frame(&mut self, grid: &Grid, status: &str) -> Result<()>;
}

/// Raw terminal mode switch.
///
/// Use through [`crate::guard::RawModeGuard`], which pairs the calls.
pub trait TerminalMode {
    fn enter_raw_mode(&mut self) -> Result<()>;
    fn restore_mode(&mut self) -> Result<()>;
}

/// Fixed-interval tick pacing.
pub trait Scheduler {
    /// Block (or not) until the next tick is due.
    fn wait_next_tick(&mut self);

    /// Ticks waited so far.
    fn ticks(&self) -> u64;
}
