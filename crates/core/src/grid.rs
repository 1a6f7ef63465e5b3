//! Grid population: World -> semantic tiles.
//!
//! This is the layout half of rendering. It decides what occupies each cell
//! and leaves glyphs and colours to the renderer.

use crate::types::Tile;
use crate::world::World;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    tiles: Vec<Tile>,
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Empty; width as usize * height as usize],
        }
    }

    pub fn from_world(world: &World) -> Self {
        let cfg = world.config();
        let mut grid = Self::new(cfg.width, cfg.height);
        grid.fill_from(world);
        grid
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Tile at (x, y); `None` off-grid.
    pub fn get(&self, x: i32, y: i32) -> Option<Tile> {
        self.idx(x, y).map(|i| self.tiles[i])
    }

    pub fn set(&mut self, x: i32, y: i32, tile: Tile) {
        if let Some(i) = self.idx(x, y) {
            self.tiles[i] = tile;
        }
    }

    /// Row `y` from left to right.
    pub fn row(&self, y: u16) -> &[Tile] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.tiles[start..start + w]
    }

    /// Repopulate in place, resizing to the world's lane if needed.
    pub fn fill_from(&mut self, world: &World) {
        let cfg = world.config();
        if self.width != cfg.width || self.height != cfg.height {
            *self = Self::new(cfg.width, cfg.height);
        }
        self.tiles.fill(Tile::Empty);

        // Earlier obstacles win a shared cell; the crab wins over all of them.
        for obstacle in world.obstacles().iter().rev() {
            self.set(obstacle.column(), obstacle.row(), obstacle.kind().into());
        }

        let player = world.player();
        self.set(player.column(), player.row(), Tile::Crab);

        let floor = cfg.floor_row();
        for x in 0..self.width as i32 {
            self.set(x, floor, Tile::Ground);
        }
    }
}
