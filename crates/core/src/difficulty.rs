//! Difficulty ratchet.
//!
//! Speed only goes up and the spawn interval only goes down, both clamped.

use crate::types::{
    BASE_FREQUENCY, BASE_SPEED, FREQUENCY_SCORE_INTERVAL, FREQUENCY_STEP, MAX_SPEED,
    MIN_FREQUENCY, SPEED_SCORE_INTERVAL, SPEED_STEP, SUBCELL,
};

/// Which knobs moved on a score update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DifficultyChange {
    pub speed_raised: bool,
    pub frequency_lowered: bool,
}

impl DifficultyChange {
    pub fn any(&self) -> bool {
        self.speed_raised || self.frequency_lowered
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Difficulty {
    /// Obstacle speed in tenths of a column per tick.
    pub(crate) speed: i32,
    /// Ticks between spawns.
    pub(crate) frequency: u32,
}

impl Difficulty {
    pub fn new() -> Self {
        Self {
            speed: BASE_SPEED,
            frequency: BASE_FREQUENCY,
        }
    }

    /// Obstacle speed in tenths of a column per tick.
    pub fn speed_tenths(&self) -> i32 {
        self.speed
    }

    /// Obstacle speed in columns per tick.
    pub fn speed(&self) -> f32 {
        self.speed as f32 / SUBCELL as f32
    }

    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Apply the ratchet for a freshly incremented `score`.
    ///
    /// Both checks run independently and may fire on the same score.
    pub fn on_score(&mut self, score: u32) -> DifficultyChange {
        let mut change = DifficultyChange::default();

        if score % SPEED_SCORE_INTERVAL == 0 && self.speed < MAX_SPEED {
            self.speed = (self.speed + SPEED_STEP).min(MAX_SPEED);
            change.speed_raised = true;
        }
        if score % FREQUENCY_SCORE_INTERVAL == 0 && self.frequency > MIN_FREQUENCY {
            self.frequency = self.frequency.saturating_sub(FREQUENCY_STEP).max(MIN_FREQUENCY);
            change.frequency_lowered = true;
        }

        change
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new()
    }
}
