//! World state - the authoritative mutable model of one run
//!
//! [`World::step`] runs one tick of the pipeline in a fixed order:
//! physics, spawn, advance and prune, collision, score and difficulty.
//! Once a collision (or [`World::end`]) sets `game_over`, further steps
//! are no-ops.

use crate::collision;
use crate::config::GameConfig;
use crate::difficulty::{Difficulty, DifficultyChange};
use crate::obstacle::{Obstacle, Spawner};
use crate::player::Player;
use crate::types::ObstacleKind;

/// What happened during one world step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickEvents {
    pub spawned: Option<ObstacleKind>,
    pub collided: bool,
    pub difficulty: DifficultyChange,
}

#[derive(Debug, Clone)]
pub struct World {
    config: GameConfig,
    player: Player,
    /// Spawn order.
    obstacles: Vec<Obstacle>,
    spawner: Spawner,
    difficulty: Difficulty,
    score: u32,
    frame_count: u64,
    game_over: bool,
}

impl World {
    pub fn new(config: GameConfig, seed: u32) -> Self {
        Self {
            player: Player::new(config.player_column, config.rest_height()),
            obstacles: Vec::new(),
            spawner: Spawner::new(seed),
            difficulty: Difficulty::new(),
            score: 0,
            frame_count: 0,
            game_over: false,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn difficulty(&self) -> &Difficulty {
        &self.difficulty
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Place an obstacle directly, bypassing the spawner.
    pub fn insert_obstacle(&mut self, obstacle: Obstacle) {
        if !self.game_over {
            self.obstacles.push(obstacle);
        }
    }

    /// Stop the run without a collision (quit).
    pub fn end(&mut self) {
        self.game_over = true;
    }

    /// Run one tick.
    pub fn step(&mut self, jump: bool) -> TickEvents {
        if self.game_over {
            return TickEvents::default();
        }

        self.player.step(jump);

        let spawned = self.spawn();
        self.advance_obstacles();
        let collided = collision::detect(&self.player, &self.obstacles, self.config.air_band);
        let difficulty = self.update_score();

        self.frame_count += 1;
        if collided {
            self.game_over = true;
        }

        TickEvents {
            spawned,
            collided,
            difficulty,
        }
    }

    fn spawn(&mut self) -> Option<ObstacleKind> {
        let obstacle = self.spawner.maybe_spawn(
            &self.config,
            self.frame_count,
            self.difficulty.frequency(),
        )?;
        self.obstacles.push(obstacle);
        Some(obstacle.kind())
    }

    fn advance_obstacles(&mut self) {
        let speed = self.difficulty.speed_tenths();
        for obstacle in &mut self.obstacles {
            obstacle.advance(speed);
        }
        self.obstacles.retain(|o| !o.is_gone());
    }

    fn update_score(&mut self) -> DifficultyChange {
        self.score += 1;
        self.difficulty.on_score(self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Variant;

    /// A world whose spawner never fires after frame 0.
    fn quiet_world() -> World {
        let mut w = World::new(GameConfig::new(Variant::Deep).without_countdown(), 1);
        w.difficulty.frequency = u32::MAX;
        w.frame_count = 1;
        w
    }

    #[test]
    fn first_tick_spawns_and_advances() {
        let mut w = World::new(GameConfig::default(), 5);
        let ev = w.step(false);
        assert!(ev.spawned.is_some());
        assert_eq!(w.obstacles().len(), 1);
        assert_eq!(w.obstacles()[0].position(), 580);
        assert_eq!(w.frame_count(), 1);
        assert_eq!(w.score(), 1);
    }

    #[test]
    fn ground_obstacle_reaches_crab_on_tick_53() {
        let mut w = quiet_world();
        w.insert_obstacle(Obstacle::new(ObstacleKind::Octopus, 59, w.config.ground_row()));

        for tick in 1..=52 {
            let ev = w.step(false);
            assert!(!ev.collided, "unexpected collision on tick {tick}");
        }
        let ev = w.step(false);
        assert!(ev.collided);
        assert_eq!(w.obstacles()[0].column(), 6);
        assert!(w.game_over());
        // Colliding tick still counts.
        assert_eq!(w.score(), 53);
    }

    #[test]
    fn obstacle_removed_on_the_tick_it_reaches_zero() {
        let mut w = quiet_world();
        // High fish never touches a grounded crab.
        w.insert_obstacle(Obstacle::new(ObstacleKind::Fish, 59, 1));

        for _ in 1..=58 {
            assert!(!w.step(false).collided);
            assert_eq!(w.obstacles().len(), 1);
        }
        assert_eq!(w.obstacles()[0].position(), 10);
        w.step(false);
        assert!(w.obstacles().is_empty());
    }

    #[test]
    fn game_over_freezes_world() {
        let mut w = quiet_world();
        w.end();
        let before = (w.score(), w.frame_count(), *w.player());
        let ev = w.step(true);
        assert_eq!(ev, TickEvents::default());
        assert_eq!((w.score(), w.frame_count(), *w.player()), before);
    }

    #[test]
    fn jumping_over_a_ground_obstacle() {
        let mut w = quiet_world();
        w.insert_obstacle(Obstacle::new(ObstacleKind::Squid, 59, w.config.ground_row()));

        // Overlap ticks are 53..=55; jump on tick 51 keeps the crab aloft until 66.
        for tick in 1..=70 {
            let ev = w.step(tick == 51);
            assert!(!ev.collided, "hit on tick {tick}");
        }
        assert!(w.obstacles().is_empty());
        assert_eq!(w.player().height(), 50);
    }

    #[test]
    fn raised_speed_moves_obstacles_further() {
        let mut w = quiet_world();
        w.score = 199;
        w.insert_obstacle(Obstacle::new(ObstacleKind::Octopus, 20, w.config.ground_row()));

        let ev = w.step(false);
        assert!(ev.difficulty.speed_raised);
        assert_eq!(w.score(), 200);
        // Score updates after advancement, so this tick still moved 1.0.
        assert_eq!(w.obstacles()[0].position(), 190);

        w.step(false);
        assert_eq!(w.obstacles()[0].position(), 179);
        assert_eq!(w.obstacles()[0].column(), 17);
    }
}
