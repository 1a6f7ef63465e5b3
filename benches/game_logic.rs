use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crab_crawl::core::{collision, GameConfig, Grid, Obstacle, World};
use crab_crawl::term::{GameView, Viewport};
use crab_crawl::types::{ObstacleKind, Variant};

fn busy_world() -> World {
    let mut world = World::new(GameConfig::new(Variant::Deep).without_countdown(), 12345);
    for (i, kind) in ObstacleKind::ALL.iter().cycle().take(6).enumerate() {
        let row = if kind.is_airborne() { 2 } else { world.config().ground_row() };
        world.insert_obstacle(Obstacle::new(*kind, 20 + 6 * i as i32, row));
    }
    world
}

fn bench_step(c: &mut Criterion) {
    c.bench_function("world_step", |b| {
        b.iter_batched(
            busy_world,
            |mut world| {
                for _ in 0..20 {
                    black_box(world.step(false));
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_collision(c: &mut Criterion) {
    let world = busy_world();
    c.bench_function("collision_detect", |b| {
        b.iter(|| {
            collision::detect(
                black_box(world.player()),
                black_box(world.obstacles()),
                world.config().air_band,
            )
        })
    });
}

fn bench_grid_fill(c: &mut Criterion) {
    let world = busy_world();
    let mut grid = Grid::from_world(&world);
    c.bench_function("grid_fill", |b| {
        b.iter(|| grid.fill_from(black_box(&world)))
    });
}

fn bench_render(c: &mut Criterion) {
    let world = busy_world();
    let grid = Grid::from_world(&world);
    let view = GameView::default();
    let mut fb = crab_crawl::term::FrameBuffer::new(80, 24);
    c.bench_function("render_into", |b| {
        b.iter(|| view.render_into(&grid, "CRAB CRAWL - Score: 0", Viewport::new(80, 24), &mut fb))
    });
}

criterion_group!(benches, bench_step, bench_collision, bench_grid_fill, bench_render);
criterion_main!(benches);
