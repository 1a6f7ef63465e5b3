//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the lane grid from the core crate
//! is mapped to glyphs ([`Palette`]), laid out in a framebuffer
//! ([`GameView`]) and flushed with crossterm ([`TerminalRenderer`]).
//! [`TerminalScreen`] owns raw mode and the alternate screen.
//!
//! Goals:
//! - Keep `core` deterministic and free of glyph choices
//! - Only re-send changed cells each tick

pub mod fb;
pub mod game_view;
pub mod mode;
pub mod palette;
pub mod renderer;

pub use crab_crawl_core as core;
pub use crab_crawl_engine as engine;
pub use crab_crawl_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use mode::TerminalScreen;
pub use palette::Palette;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
