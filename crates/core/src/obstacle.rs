//! Obstacles, their per-kind rules, and the spawner.
//!
//! Placement and hitbox shape are not branched on per call site; every kind
//! has one entry in [`KIND_RULES`] and the spawner and collision detector read
//! from it.

use crate::config::GameConfig;
use crate::rng::SimpleRng;
use crate::types::{ObstacleKind, SUBCELL};

/// Where a kind is placed when it spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Always on the ground row.
    Ground,
    /// On a random row of the configured fish band.
    Band,
}

/// How the vertical part of a hitbox is tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalRule {
    /// Crab's floored row must equal the obstacle row.
    SameRow,
    /// Tolerance test configured by [`crate::config::AirBand`].
    AirBand,
}

/// Static rules for one obstacle kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindRule {
    pub placement: Placement,
    /// Hitbox columns covered relative to `floor(x)`, inclusive.
    pub span: (i32, i32),
    pub vertical: VerticalRule,
}

/// Rules indexed by [`ObstacleKind::index`].
pub const KIND_RULES: [KindRule; 3] = [
    // Octopus
    KindRule {
        placement: Placement::Ground,
        span: (0, 1),
        vertical: VerticalRule::SameRow,
    },
    // Squid
    KindRule {
        placement: Placement::Ground,
        span: (0, 1),
        vertical: VerticalRule::SameRow,
    },
    // Fish: one extra column in front and behind
    KindRule {
        placement: Placement::Band,
        span: (-1, 2),
        vertical: VerticalRule::AirBand,
    },
];

pub fn rule(kind: ObstacleKind) -> &'static KindRule {
    &KIND_RULES[kind.index()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Obstacle {
    kind: ObstacleKind,
    /// Horizontal position in tenths of a column.
    x: i32,
    row: i32,
}

impl Obstacle {
    /// An obstacle at a whole column.
    pub fn new(kind: ObstacleKind, column: i32, row: i32) -> Self {
        Self {
            kind,
            x: column * SUBCELL,
            row,
        }
    }

    pub fn kind(&self) -> ObstacleKind {
        self.kind
    }

    /// Position in tenths of a column.
    pub fn position(&self) -> i32 {
        self.x
    }

    /// Floored column.
    pub fn column(&self) -> i32 {
        self.x.div_euclid(SUBCELL)
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    /// Inclusive column range of the hitbox.
    pub fn hitbox_columns(&self) -> (i32, i32) {
        let (lo, hi) = rule(self.kind).span;
        let c = self.column();
        (c + lo, c + hi)
    }

    /// Move left by `speed` tenths.
    pub fn advance(&mut self, speed: i32) {
        self.x -= speed;
    }

    /// Past the left boundary.
    pub fn is_gone(&self) -> bool {
        self.x <= 0
    }
}

/// Procedural obstacle source.
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: SimpleRng,
}

impl Spawner {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Spawn happens on frames that are a multiple of the interval.
    pub fn is_due(frame: u64, frequency: u32) -> bool {
        frequency != 0 && frame % frequency as u64 == 0
    }

    /// Create one obstacle at the right boundary.
    pub fn spawn(&mut self, config: &GameConfig) -> Obstacle {
        let kind = self
            .rng
            .choose(&ObstacleKind::ALL)
            .unwrap_or(ObstacleKind::Octopus);
        let row = match rule(kind).placement {
            Placement::Ground => config.ground_row(),
            Placement::Band => {
                let (top, bottom) = config.fish_rows;
                self.rng.next_between(top, bottom)
            }
        };
        Obstacle::new(kind, config.spawn_column(), row)
    }

    /// Spawn if `frame` is due under `frequency`.
    pub fn maybe_spawn(
        &mut self,
        config: &GameConfig,
        frame: u64,
        frequency: u32,
    ) -> Option<Obstacle> {
        Self::is_due(frame, frequency).then(|| self.spawn(config))
    }
}
