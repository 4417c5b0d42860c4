use criterion::{criterion_group, criterion_main, Criterion};

use env_logger::Env;
use focal_pathfinding::prelude::*;
use nanorand::WyRand;

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("FOCAL_LOG_LEVEL", "debug")
        .write_style_or("FOCAL_LOG_STYLE", "always");

    env_logger::init_from_env(env);
    let _ = env_logger::builder().is_test(true).try_init();
}

fn build_map(width: usize, height: usize, density: f64, seed: u64) -> GridMap {
    let generator = ObstacleGenerator::new(width, height, (0, 0), (width - 1, height - 1))
        .expect("valid map configuration");
    let mut rng = WyRand::new_seed(seed);
    let obstacles = generator
        .generate_by_density(density, &mut rng)
        .expect("valid density");
    GridMap::new(width, height, obstacles)
}

fn bench_search_once(c: &mut Criterion) {
    let map = build_map(64, 64, 0.15, 4);
    let tight = FocalSearch::new(&map, SearchParams::default());
    let loose = FocalSearch::new(
        &map,
        SearchParams {
            w: 2.0,
            ..SearchParams::default()
        },
    );

    c.bench_function("search_once 64x64 w=0", |b| {
        b.iter(|| tight.search_once((0, 0), (63, 63)))
    });
    c.bench_function("search_once 64x64 w=2", |b| {
        b.iter(|| loose.search_once((0, 0), (63, 63)))
    });
}

fn bench_candidates(c: &mut Criterion) {
    let map = build_map(64, 64, 0.15, 4);
    let config = DiversifyConfig {
        candidate_count: 5,
        max_tries: 30,
        ..DiversifyConfig::default()
    };

    c.bench_function("generate_candidate_paths 64x64", |b| {
        b.iter(|| {
            let mut rng = WyRand::new_seed(7);
            generate_candidate_paths(&map, (0, 0), (63, 63), &config, &mut rng)
        })
    });
}

criterion_group!(benches, bench_search_once, bench_candidates);
criterion_main!(benches);
