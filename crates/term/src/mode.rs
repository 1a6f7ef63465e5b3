//! Raw mode and screen setup for a real terminal.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};
use log::debug;

use crate::engine::TerminalMode;

/// Raw mode plus alternate screen, hidden cursor and no line wrap.
#[derive(Debug, Default)]
pub struct TerminalScreen;

impl TerminalScreen {
    pub fn new() -> Self {
        Self
    }
}

impl TerminalMode for TerminalScreen {
    fn enter_raw_mode(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;

        let mut buf = Vec::new();
        buf.queue(terminal::EnterAlternateScreen)?;
        buf.queue(cursor::Hide)?;
        buf.queue(terminal::DisableLineWrap)?;
        let mut stdout = io::stdout();
        stdout.write_all(&buf)?;
        stdout.flush()?;
        debug!("terminal: raw mode on");
        Ok(())
    }

    /// Undo everything `enter_raw_mode` did. Every step is attempted even if
    /// an earlier one fails; the first error is returned.
    fn restore_mode(&mut self) -> Result<()> {
        let mut buf = Vec::new();
        buf.queue(ResetColor)?;
        buf.queue(SetAttribute(Attribute::Reset))?;
        buf.queue(terminal::EnableLineWrap)?;
        buf.queue(cursor::Show)?;
        buf.queue(terminal::LeaveAlternateScreen)?;

        let mut stdout = io::stdout();
        let written = stdout.write_all(&buf).and_then(|_| stdout.flush());
        let disabled = terminal::disable_raw_mode();
        debug!("terminal: raw mode off");

        written?;
        disabled?;
        Ok(())
    }
}
