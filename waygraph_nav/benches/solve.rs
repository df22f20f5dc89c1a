// Solver benchmarks over a generated grid network.
//
// Hand-authored networks are small (tens of nodes); the grid here is
// deliberately oversized to keep the measurements out of the noise floor.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use waygraph_nav::{PathCache, PathNetwork, WorldPos, reconstruct, solve};

/// A `side` x `side` grid, 4-connected with edges in both directions,
/// 10 world units apart.
fn grid_network(side: usize) -> PathNetwork {
    let mut network = PathNetwork::new();
    let index = |x: usize, z: usize| z * side + x;

    for z in 0..side {
        for x in 0..side {
            let mut connections = Vec::new();
            if x > 0 {
                connections.push(index(x - 1, z));
            }
            if x + 1 < side {
                connections.push(index(x + 1, z));
            }
            if z > 0 {
                connections.push(index(x, z - 1));
            }
            if z + 1 < side {
                connections.push(index(x, z + 1));
            }
            network.add_node(
                WorldPos::new(x as f32 * 10.0, 0.0, z as f32 * 10.0),
                connections,
            );
        }
    }
    network.initialize();
    network
}

fn bench_solve(c: &mut Criterion) {
    let network = grid_network(32);

    c.bench_function("solve_grid_32x32", |b| {
        b.iter(|| solve(black_box(&network), black_box(0)))
    });
}

fn bench_cached_get(c: &mut Criterion) {
    let network = grid_network(32);
    let mut cache = PathCache::new(network.node_count());
    cache.get(&network, 0);

    c.bench_function("cached_get_grid_32x32", |b| {
        b.iter(|| cache.get(black_box(&network), black_box(0)).len())
    });
}

fn bench_reconstruct(c: &mut Criterion) {
    let network = grid_network(32);
    let table = solve(&network, 0);
    let far_corner = network.node_count() - 1;

    c.bench_function("reconstruct_grid_corner_to_corner", |b| {
        b.iter(|| reconstruct(black_box(&network), black_box(&table), black_box(far_corner)))
    });
}

criterion_group!(benches, bench_solve, bench_cached_get, bench_reconstruct);
criterion_main!(benches);
