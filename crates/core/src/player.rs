//! Physics model for the crab.
//!
//! Heights grow downward (row 0 is the top of the lane), so a jump launches
//! with a positive velocity that is *subtracted* from `y` each tick while
//! gravity eats the velocity away. All values are in tenths of a row.

use crate::types::{GRAVITY, JUMP_VELOCITY, SUBCELL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    column: i32,
    /// Height in tenths of a row; never greater than `rest`.
    y: i32,
    /// Upward velocity in tenths of a row per tick.
    velocity: i32,
    airborne: bool,
    rest: i32,
}

impl Player {
    /// A crab standing on the ground at `rest` (tenths).
    pub fn new(column: i32, rest: i32) -> Self {
        Self {
            column,
            y: rest,
            velocity: 0,
            airborne: false,
            rest,
        }
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    /// Height in tenths of a row.
    pub fn height(&self) -> i32 {
        self.y
    }

    /// Height in rows.
    pub fn y(&self) -> f32 {
        self.y as f32 / SUBCELL as f32
    }

    /// Floored row the crab occupies.
    pub fn row(&self) -> i32 {
        self.y.div_euclid(SUBCELL)
    }

    pub fn velocity(&self) -> i32 {
        self.velocity
    }

    pub fn is_airborne(&self) -> bool {
        self.airborne
    }

    pub fn rest(&self) -> i32 {
        self.rest
    }

    /// Launch a jump. Returns false when already airborne.
    pub fn jump(&mut self) -> bool {
        if self.airborne {
            return false;
        }
        self.airborne = true;
        self.velocity = JUMP_VELOCITY;
        true
    }

    /// One tick of integration; a grounded crab does not move.
    pub fn integrate(&mut self) {
        if !self.airborne {
            return;
        }
        self.y -= self.velocity;
        self.velocity -= GRAVITY;

        if self.y >= self.rest {
            self.y = self.rest;
            self.velocity = 0;
            self.airborne = false;
        }
    }

    /// Next physics state from the current one plus the jump trigger.
    pub fn next(mut self, jump: bool) -> Self {
        if jump {
            self.jump();
        }
        self.integrate();
        self
    }

    pub fn step(&mut self, jump: bool) {
        *self = self.next(jump);
    }
}
