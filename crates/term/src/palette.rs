//! Tile -> glyph and colour.

use crate::fb::{Cell, CellStyle, Rgb};
use crate::types::Tile;

const SEA: Rgb = Rgb::new(10, 30, 60);

/// Glyph table for lane tiles. All glyphs are single-width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub empty: Cell,
    pub crab: Cell,
    pub octopus: Cell,
    pub squid: Cell,
    pub fish: Cell,
    pub ground: Cell,
}

impl Palette {
    pub fn cell(&self, tile: Tile) -> Cell {
        match tile {
            Tile::Empty => self.empty,
            Tile::Crab => self.crab,
            Tile::Octopus => self.octopus,
            Tile::Squid => self.squid,
            Tile::Fish => self.fish,
            Tile::Ground => self.ground,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            empty: Cell {
                ch: ' ',
                style: CellStyle::new(Rgb::new(200, 200, 200), SEA),
            },
            crab: Cell {
                ch: 'C',
                style: CellStyle::new(Rgb::new(240, 80, 60), SEA).bold(),
            },
            octopus: Cell {
                ch: 'O',
                style: CellStyle::new(Rgb::new(200, 110, 220), SEA).bold(),
            },
            squid: Cell {
                ch: 'S',
                style: CellStyle::new(Rgb::new(250, 170, 190), SEA).bold(),
            },
            fish: Cell {
                ch: '<',
                style: CellStyle::new(Rgb::new(90, 210, 230), SEA).bold(),
            },
            ground: Cell {
                ch: '-',
                style: CellStyle::new(Rgb::new(210, 180, 120), SEA),
            },
        }
    }
}
