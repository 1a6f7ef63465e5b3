//! Collision detection between the crab and obstacles.
//!
//! The crab covers two columns, `[column, column + 1]`. Obstacle hitboxes come
//! from the per-kind rule table; vertical tests are either an exact row match
//! (ground kinds) or the run's [`AirBand`] tolerance (airborne kinds).

use crate::config::AirBand;
use crate::obstacle::{rule, Obstacle, VerticalRule};
use crate::player::Player;
use crate::types::SUBCELL;

/// Inclusive column range of the crab.
pub fn player_columns(player: &Player) -> (i32, i32) {
    (player.column(), player.column() + 1)
}

fn spans_overlap(a: (i32, i32), b: (i32, i32)) -> bool {
    a.0 <= b.1 && b.0 <= a.1
}

fn vertical_overlap(player: &Player, obstacle: &Obstacle, band: AirBand) -> bool {
    match rule(obstacle.kind()).vertical {
        VerticalRule::SameRow => player.row() == obstacle.row(),
        VerticalRule::AirBand => match band {
            AirBand::Real { tenths } => {
                (player.height() - obstacle.row() * SUBCELL).abs() <= tenths
            }
            AirBand::Floored { rows } => (player.row() - obstacle.row()).abs() <= rows,
        },
    }
}

/// Whether the crab touches one obstacle.
pub fn hits(player: &Player, obstacle: &Obstacle, band: AirBand) -> bool {
    spans_overlap(player_columns(player), obstacle.hitbox_columns())
        && vertical_overlap(player, obstacle, band)
}

/// First obstacle the crab touches, if any.
pub fn first_hit<'a>(
    player: &Player,
    obstacles: &'a [Obstacle],
    band: AirBand,
) -> Option<&'a Obstacle> {
    obstacles.iter().find(|o| hits(player, o, band))
}

pub fn detect(player: &Player, obstacles: &[Obstacle], band: AirBand) -> bool {
    first_hit(player, obstacles, band).is_some()
}
