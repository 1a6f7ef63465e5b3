//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary used throughout the game. All types are
//! plain data with no external dependencies, so they can be used by the pure
//! rules crate, the loop driver and the terminal renderer alike.
//!
//! # Fixed-point units
//!
//! Heights, velocities, obstacle positions and obstacle speed are real-valued
//! quantities. They are stored as integer tenths of a cell ([`SUBCELL`]), which
//! keeps every tuning constant below exact and makes a seeded run reproducible.
//!
//! # Lane geometry
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LANE_WIDTH` | 60 | Columns in the lane; obstacles spawn at `LANE_WIDTH - 1` |
//! | `PLAYER_COLUMN` | 5 | Fixed column of the crab |
//! | `DEEP_LANE_HEIGHT` | 7 | Rows in the [`Variant::Deep`] lane |
//! | `SHALLOW_LANE_HEIGHT` | 5 | Rows in the [`Variant::Shallow`] lane |
//!
//! # Physics (tenths)
//!
//! | Constant | Value | Rows |
//! |----------|-------|------|
//! | `JUMP_VELOCITY` | 15 | 1.5 rows/tick upward |
//! | `GRAVITY` | 2 | 0.2 rows/tick² |
//!
//! # Difficulty ratchet
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_SPEED` | 10 | 1.0 columns/tick |
//! | `SPEED_STEP` | 1 | +0.1 every `SPEED_SCORE_INTERVAL` points |
//! | `MAX_SPEED` | 20 | 2.0 columns/tick cap |
//! | `BASE_FREQUENCY` | 40 | One spawn every 40 ticks |
//! | `FREQUENCY_STEP` | 2 | -2 ticks every `FREQUENCY_SCORE_INTERVAL` points |
//! | `MIN_FREQUENCY` | 25 | Spawn interval floor |
//!
//! # Examples
//!
//! ```
//! use crab_crawl_types::{GameAction, ObstacleKind, Variant};
//!
//! assert_eq!(GameAction::from_key(' '), Some(GameAction::Jump));
//! assert_eq!(GameAction::from_key('Q'), Some(GameAction::Quit));
//! assert_eq!(GameAction::from_key('x'), None);
//!
//! assert_eq!(ObstacleKind::from_str("fish"), Some(ObstacleKind::Fish));
//! assert_eq!(Variant::default(), Variant::Deep);
//! ```

/// Fixed-point subdivisions per cell (values are stored in tenths).
pub const SUBCELL: i32 = 10;

/// Lane width in columns.
pub const LANE_WIDTH: u16 = 60;

/// Column the crab runs in.
pub const PLAYER_COLUMN: i32 = 5;

/// Lane height for the deep variant (ground row 5, airborne band rows 1..=4).
pub const DEEP_LANE_HEIGHT: u16 = 7;

/// Lane height for the shallow variant (ground row 3, airborne row 2).
pub const SHALLOW_LANE_HEIGHT: u16 = 5;

/// Fixed tick interval in milliseconds (50ms = 20 Hz).
pub const TICK_MS: u32 = 50;

/// Countdown before the crab starts running.
pub const COUNTDOWN_MS: u32 = 3000;

/// Launch velocity in tenths of a row per tick (1.5).
pub const JUMP_VELOCITY: i32 = 15;

/// Per-tick deceleration in tenths of a row (0.2).
pub const GRAVITY: i32 = 2;

/// Starting obstacle speed in tenths of a column per tick (1.0).
pub const BASE_SPEED: i32 = 10;

/// Speed increase per ratchet step (0.1).
pub const SPEED_STEP: i32 = 1;

/// Obstacle speed cap (2.0).
pub const MAX_SPEED: i32 = 20;

/// Score interval between speed increases.
pub const SPEED_SCORE_INTERVAL: u32 = 200;

/// Starting spawn interval in ticks.
pub const BASE_FREQUENCY: u32 = 40;

/// Spawn interval decrease per ratchet step.
pub const FREQUENCY_STEP: u32 = 2;

/// Spawn interval floor.
pub const MIN_FREQUENCY: u32 = 25;

/// Score interval between spawn interval decreases.
pub const FREQUENCY_SCORE_INTERVAL: u32 = 300;

/// Deep variant airborne tolerance in tenths (|crabY - fishY| <= 0.5).
pub const DEEP_AIR_TOLERANCE: i32 = 5;

/// Shallow variant airborne tolerance in whole rows (|floor(crabY) - fishY| <= 1).
pub const SHALLOW_AIR_TOLERANCE: i32 = 1;

/// ETX, delivered for Ctrl-C while the terminal is in raw mode.
pub const INTERRUPT_KEY: char = '\u{3}';


/// Obstacle kinds.
///
/// - **Octopus**: ground kind, sits on the row above the ground line
/// - **Squid**: ground kind, same placement and hitbox as the octopus
/// - **Fish**: airborne kind, swims in a band above the ground
///
/// Placement and hitbox rules are looked up per kind by the rules crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObstacleKind {
    Octopus,
    Squid,
    Fish,
}

impl ObstacleKind {
    /// Every kind, in spawn-table order.
    pub const ALL: [ObstacleKind; 3] = [
        ObstacleKind::Octopus,
        ObstacleKind::Squid,
        ObstacleKind::Fish,
    ];

    /// Position of this kind in [`ObstacleKind::ALL`] and in per-kind tables.
    pub const fn index(self) -> usize {
        match self {
            ObstacleKind::Octopus => 0,
            ObstacleKind::Squid => 1,
            ObstacleKind::Fish => 2,
        }
    }

    /// Parse kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use crab_crawl_types::ObstacleKind;
    ///
    /// assert_eq!(ObstacleKind::from_str("Octopus"), Some(ObstacleKind::Octopus));
    /// assert_eq!(ObstacleKind::from_str("squid"), Some(ObstacleKind::Squid));
    /// assert_eq!(ObstacleKind::from_str("shark"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "octopus" => Some(ObstacleKind::Octopus),
            "squid" => Some(ObstacleKind::Squid),
            "fish" => Some(ObstacleKind::Fish),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObstacleKind::Octopus => "octopus",
            ObstacleKind::Squid => "squid",
            ObstacleKind::Fish => "fish",
        }
    }

    pub fn is_airborne(&self) -> bool {
        matches!(self, ObstacleKind::Fish)
    }
}

/// Player actions recognised by the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Start a jump (ignored while airborne)
    Jump,
    /// End the run
    Quit,
}

impl GameAction {
    /// Map a single key to an action. Unrecognised keys map to `None`.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            ' ' => Some(GameAction::Jump),
            'q' | 'Q' | INTERRUPT_KEY => Some(GameAction::Quit),
            _ => None,
        }
    }
}

/// Rule set used for a run.
///
/// The two variants differ in lane height, in where fish spawn and in how
/// generously a fish's vertical hitbox is tested. A run never mixes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// Seven-row lane; fish spawn on a random row in 1..=4 and hit when the
    /// crab's real height is within half a row.
    #[default]
    Deep,
    /// Five-row lane; fish always spawn on row 2 and hit when the crab's
    /// floored row is within one row.
    Shallow,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Deep => "deep",
            Variant::Shallow => "shallow",
        }
    }
}

/// Semantic content of one grid cell.
///
/// The rules crate fills a grid of tiles; glyphs and colours are chosen by
/// whoever draws it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Empty,
    Crab,
    Octopus,
    Squid,
    Fish,
    Ground,
}

impl From<ObstacleKind> for Tile {
    fn from(kind: ObstacleKind) -> Self {
        match kind {
            ObstacleKind::Octopus => Tile::Octopus,
            ObstacleKind::Squid => Tile::Squid,
            ObstacleKind::Fish => Tile::Fish,
        }
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// The crab touched an obstacle.
    Collision,
    /// The player pressed the quit key.
    Quit,
}

impl EndReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            EndReason::Collision => "collision",
            EndReason::Quit => "quit",
        }
    }
}
