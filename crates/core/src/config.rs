//! Per-run tunables derived from the selected [`Variant`].

use crate::types::{
    Variant, COUNTDOWN_MS, DEEP_AIR_TOLERANCE, DEEP_LANE_HEIGHT, LANE_WIDTH, PLAYER_COLUMN,
    SHALLOW_AIR_TOLERANCE, SHALLOW_LANE_HEIGHT, SUBCELL, TICK_MS,
};

/// Vertical test applied to airborne obstacles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirBand {
    /// Hit when `|crabY - fishY| <= tenths / 10`, using the real crab height.
    Real { tenths: i32 },
    /// Hit when `|floor(crabY) - fishY| <= rows`.
    Floored { rows: i32 },
}

/// Geometry and rules for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub variant: Variant,
    /// Lane width in columns.
    pub width: u16,
    /// Lane height in rows; the last row is the ground line.
    pub height: u16,
    pub player_column: i32,
    /// Ticks spent in the `Starting` phase.
    pub countdown_ticks: u32,
    /// Inclusive row band fish spawn in (top, bottom).
    pub fish_rows: (i32, i32),
    pub air_band: AirBand,
}

impl GameConfig {
    pub fn new(variant: Variant) -> Self {
        let height = match variant {
            Variant::Deep => DEEP_LANE_HEIGHT,
            Variant::Shallow => SHALLOW_LANE_HEIGHT,
        };
        let h = height as i32;
        let (fish_rows, air_band) = match variant {
            Variant::Deep => ((h - 6, h - 3), AirBand::Real { tenths: DEEP_AIR_TOLERANCE }),
            Variant::Shallow => ((h - 3, h - 3), AirBand::Floored { rows: SHALLOW_AIR_TOLERANCE }),
        };

        Self {
            variant,
            width: LANE_WIDTH,
            height,
            player_column: PLAYER_COLUMN,
            countdown_ticks: COUNTDOWN_MS / TICK_MS,
            fish_rows,
            air_band,
        }
    }

    /// Skip the start countdown.
    pub fn without_countdown(mut self) -> Self {
        self.countdown_ticks = 0;
        self
    }

    /// Row ground obstacles sit on, and the crab rests on.
    pub fn ground_row(&self) -> i32 {
        self.height as i32 - 2
    }

    /// Row drawn as the ground line.
    pub fn floor_row(&self) -> i32 {
        self.height as i32 - 1
    }

    /// Resting crab height in tenths.
    pub fn rest_height(&self) -> i32 {
        self.ground_row() * SUBCELL
    }

    /// Column obstacles spawn at.
    pub fn spawn_column(&self) -> i32 {
        self.width as i32 - 1
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}
