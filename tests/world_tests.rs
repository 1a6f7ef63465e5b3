//! World-level properties and scenarios through the public API.

use crab_crawl::core::{Game, GameConfig, Obstacle, World};
use crab_crawl::types::{GameAction, ObstacleKind, Variant, MAX_SPEED, MIN_FREQUENCY};

/// Jump when a ground obstacle is about to reach the crab.
fn bot(world: &World) -> bool {
    let player = world.player();
    !player.is_airborne()
        && world
            .obstacles()
            .iter()
            .any(|o| !o.kind().is_airborne() && (7..=8).contains(&o.column()))
}

#[test]
fn tick_invariants_hold_across_seeds() {
    for variant in [Variant::Deep, Variant::Shallow] {
        for seed in 1..=20 {
            let mut world = World::new(GameConfig::new(variant).without_countdown(), seed);
            let rest = world.player().rest();
            let mut ticks = 0u32;

            while !world.game_over() && ticks < 3000 {
                let frame = world.frame_count();
                let frequency = world.difficulty().frequency();
                let events = world.step(bot(&world));
                ticks += 1;

                assert_eq!(world.frame_count(), frame + 1);
                assert_eq!(
                    events.spawned.is_some(),
                    frame % frequency as u64 == 0,
                    "seed {seed} frame {frame}"
                );
                assert_eq!(world.score(), ticks);
                assert!(world.player().height() <= rest);
                assert!(world.obstacles().iter().all(|o| o.position() > 0));
                assert!(world.difficulty().speed_tenths() <= MAX_SPEED);
                assert!(world.difficulty().frequency() >= MIN_FREQUENCY);
                assert_eq!(events.collided, world.game_over());
            }
        }
    }
}

#[test]
fn same_seed_same_run() {
    let run = |seed| {
        let mut world = World::new(GameConfig::default().without_countdown(), seed);
        let mut trace = Vec::new();
        while !world.game_over() && world.frame_count() < 500 {
            world.step(bot(&world));
            trace.push((world.player().height(), world.obstacles().to_vec()));
        }
        (world.score(), trace)
    };
    assert_eq!(run(77), run(77));
}

#[test]
fn ground_obstacle_from_spawn_column_hits_grounded_crab_on_tick_53() {
    let mut world = World::new(GameConfig::new(Variant::Deep).without_countdown(), 9);
    let ground = world.config().ground_row();
    world.insert_obstacle(Obstacle::new(ObstacleKind::Octopus, 59, ground));

    for tick in 1..=52 {
        assert!(!world.step(false).collided, "early hit on tick {tick}");
    }
    assert!(world.step(false).collided);
    assert_eq!(world.score(), 53);
    assert!(world.game_over());
}

#[test]
fn crab_lands_exactly_after_any_jump() {
    let mut game = Game::new(GameConfig::default().without_countdown(), 3);
    game.tick(Some(GameAction::Jump));
    let mut airborne_ticks = 1;
    while game.world().player().is_airborne() {
        game.tick(None);
        airborne_ticks += 1;
    }
    assert_eq!(airborne_ticks, 16);
    assert_eq!(game.world().player().height(), game.world().player().rest());
    assert_eq!(game.world().player().velocity(), 0);
}

#[test]
fn score_counts_running_ticks_only() {
    let mut game = Game::new(GameConfig::default(), 5);
    for _ in 0..60 {
        game.tick(None);
    }
    assert_eq!(game.score(), 0);
    for _ in 0..30 {
        game.tick(None);
    }
    assert_eq!(game.score(), 30);
}
