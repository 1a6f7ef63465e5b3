//! Jump timing against airborne obstacles.
//!
//! A fish placed at column 12 overlaps the crab's columns on ticks 5..=9.
//! The jump arc (tenths of a row, starting on the jump tick) is
//! 35 22 11 2 -5 -10 -13 -14 -13 -10 -5 2 11 22 35, then lands; the peak
//! is 1.4 rows above the top of the lane.

use crab_crawl::core::{GameConfig, Obstacle, World};
use crab_crawl::types::{ObstacleKind, Variant};

/// Run 12 ticks with a fish at `row`, jumping on `jump_tick` if given.
/// Returns the tick of the first collision.
fn fish_run(variant: Variant, row: i32, jump_tick: Option<u32>) -> Option<u32> {
    let mut world = World::new(GameConfig::new(variant).without_countdown(), 1);
    world.insert_obstacle(Obstacle::new(ObstacleKind::Fish, 12, row));
    for tick in 1..=12 {
        if world.step(jump_tick == Some(tick)).collided {
            return Some(tick);
        }
    }
    None
}

#[test]
fn deep_low_fish_passes_over_grounded_crab() {
    assert_eq!(fish_run(Variant::Deep, 4, None), None);
}

#[test]
fn deep_jump_just_before_overlap_clears_low_fish() {
    // Heights on ticks 5..=9 are 2.2, 1.1, 0.2, -0.5, -1.0: all above row 4 by more than 0.5.
    assert_eq!(fish_run(Variant::Deep, 4, Some(4)), None);
}

#[test]
fn deep_jump_into_overlap_hits_low_fish() {
    // Jump tick height is 3.5, exactly half a row from row 4.
    assert_eq!(fish_run(Variant::Deep, 4, Some(5)), Some(5));
}

#[test]
fn deep_jump_rises_into_high_fish() {
    // Two ticks after the jump the crab is at 1.1, within half a row of row 1.
    assert_eq!(fish_run(Variant::Deep, 1, Some(4)), Some(6));
}

#[test]
fn deep_early_jump_passes_above_high_fish() {
    // Jump on tick 1: at 1.1 on tick 3 (fish not yet overlapping), above the lane for ticks 5..=9.
    assert_eq!(fish_run(Variant::Deep, 1, Some(1)), None);
}

#[test]
fn shallow_fish_hits_grounded_crab() {
    // Fish hitbox first reaches the crab on tick 5.
    assert_eq!(fish_run(Variant::Shallow, 2, None), Some(5));
}

#[test]
fn shallow_jump_just_before_overlap_clears_fish() {
    // Floored rows on ticks 5..=9 are 0, -1, -2, -3, -3: all more than one row above row 2.
    assert_eq!(fish_run(Variant::Shallow, 2, Some(4)), None);
}
