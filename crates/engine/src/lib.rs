//! Loop driver: paces ticks and connects the pure game to its collaborators.
//!
//! The terminal, the keyboard and the clock are reached only through the
//! traits in [`ports`], so the whole loop can be driven synchronously in
//! tests with scripted keys, a recording sink and [`ManualTicker`].

pub mod clock;
pub mod guard;
pub mod ports;
pub mod session;

pub use crab_crawl_core as core;
pub use crab_crawl_types as types;

pub use clock::{FixedTicker, ManualTicker};
pub use guard::{with_raw_mode, RawModeGuard};
pub use ports::{FrameSink, InputSource, Scheduler, TerminalMode};
pub use session::{play_once, run_session, RunSummary};
