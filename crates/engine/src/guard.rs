//! Scoped raw-mode acquisition.

use anyhow::Result;
use log::warn;

use crate::ports::TerminalMode;

/// Token for an active raw mode. Restores the terminal exactly once, either
/// through [`RawModeGuard::release`] or when dropped (early returns, panics).
pub struct RawModeGuard<'a, M: TerminalMode + ?Sized> {
    mode: &'a mut M,
    released: bool,
}

impl<'a, M: TerminalMode + ?Sized> RawModeGuard<'a, M> {
    /// Enter raw mode. On failure the mode is still restored before the error
    /// is returned, since entering may have been partially applied.
    pub fn acquire(mode: &'a mut M) -> Result<Self> {
        if let Err(err) = mode.enter_raw_mode() {
            if let Err(restore_err) = mode.restore_mode() {
                warn!("restore after failed raw mode entry also failed: {restore_err:#}");
            }
            return Err(err.context("failed to enter raw mode"));
        }
        Ok(Self {
            mode,
            released: false,
        })
    }

    /// Restore now and surface any failure.
    pub fn release(mut self) -> Result<()> {
        self.released = true;
        self.mode.restore_mode()
    }
}

impl<M: TerminalMode + ?Sized> Drop for RawModeGuard<'_, M> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        self.released = true;
        if let Err(err) = self.mode.restore_mode() {
            warn!("failed to restore terminal mode: {err:#}");
        }
    }
}

/// Run `f` with raw mode held, restoring on every exit path.
///
/// An error from `f` takes precedence over a restore error.
pub fn with_raw_mode<M, R>(mode: &mut M, f: impl FnOnce() -> Result<R>) -> Result<R>
where
    M: TerminalMode + ?Sized,
{
    let guard = RawModeGuard::acquire(mode)?;
    let result = f();
    let restored = guard.release();
    let value = result?;
    restored?;
    Ok(value)
}
