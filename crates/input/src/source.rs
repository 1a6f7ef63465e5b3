//! crossterm-backed [`InputSource`].

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event};
use log::trace;

use crate::engine::InputSource;
use crate::map::key_to_char;

/// Reads at most one key per poll without blocking.
#[derive(Debug, Default)]
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for TerminalInput {
    fn poll_key(&mut self) -> Result<Option<char>> {
        // Skip non-key events (resize, focus, releases) until a key or nothing.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if let Some(ch) = key_to_char(key) {
                    trace!("key {ch:?}");
                    return Ok(Some(ch));
                }
            }
        }
        Ok(None)
    }
}
