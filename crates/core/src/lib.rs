//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the rules of the lane runner. It has **zero
//! dependencies** on terminals, clocks or I/O, so a seed and a scripted list
//! of inputs fully determine a run.
//!
//! # Module Structure
//!
//! - [`config`]: per-run geometry and rules for each [`types::Variant`]
//! - [`player`]: jump physics (launch velocity, gravity, landing clamp)
//! - [`obstacle`]: obstacle entities, the per-kind rule table and the spawner
//! - [`collision`]: crab/obstacle hitbox overlap
//! - [`difficulty`]: speed and spawn-interval ratchet
//! - [`world`]: the world state and its per-tick pipeline
//! - [`game`]: the `Starting -> Running -> Over` state machine
//! - [`grid`]: world -> semantic tile grid for renderers
//! - [`rng`]: seeded LCG
//!
//! # Tick order
//!
//! input -> physics -> spawn -> advance and prune -> collision -> score and
//! difficulty. The colliding tick's score still counts.
//!
//! # Example
//!
//! ```
//! use crab_crawl_core::{Game, GameConfig, Phase};
//! use crab_crawl_types::{GameAction, Variant};
//!
//! let mut game = Game::new(GameConfig::new(Variant::Deep).without_countdown(), 12345);
//! assert_eq!(game.phase(), Phase::Running);
//!
//! game.tick(Some(GameAction::Jump));
//! assert!(game.world().player().is_airborne());
//! assert_eq!(game.score(), 1);
//!
//! game.tick(Some(GameAction::Quit));
//! assert!(game.is_over());
//! assert_eq!(game.score(), 1);
//! ```

pub mod collision;
pub mod config;
pub mod difficulty;
pub mod game;
pub mod grid;
pub mod obstacle;
pub mod player;
pub mod rng;
pub mod world;

pub use crab_crawl_types as types;

// Re-export commonly used types for convenience
pub use config::{AirBand, GameConfig};
pub use difficulty::{Difficulty, DifficultyChange};
pub use game::{Game, Phase};
pub use grid::Grid;
pub use obstacle::{Obstacle, Spawner};
pub use player::Player;
pub use rng::SimpleRng;
pub use world::{TickEvents, World};
