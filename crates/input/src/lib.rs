//! Terminal input module.
//!
//! Maps `crossterm` key events to plain characters and exposes them through
//! the loop's [`engine::InputSource`] port. Deciding what a character means
//! is left to [`types::GameAction::from_key`].

pub mod map;
pub mod source;

pub use crab_crawl_engine as engine;
pub use crab_crawl_types as types;

pub use map::key_to_char;
pub use source::TerminalInput;
