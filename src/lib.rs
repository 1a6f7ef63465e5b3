//! Crab Crawl (workspace facade crate).
//!
//! Re-exports the workspace crates under one name:
//! `crab_crawl::{core, engine, input, term, types}`.

pub use crab_crawl_core as core;
pub use crab_crawl_engine as engine;
pub use crab_crawl_input as input;
pub use crab_crawl_term as term;
pub use crab_crawl_types as types;
