use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sos_core::{GameEngine, MoveHeuristic, Variant};

/// Half-filled general board so the probe has both empty cells and neighbors to inspect.
fn half_filled(size: u8) -> GameEngine {
    let mut engine = GameEngine::new(size, Variant::General).unwrap();
    let mut heuristic = MoveHeuristic::new(0xC0FFEE);
    let target = usize::from(size) * usize::from(size) / 2;
    while usize::from(engine.board().filled_cells()) < target {
        let Some(mv) = heuristic.random_move(&engine) else {
            break;
        };
        engine.play(mv).unwrap();
    }
    engine
}

fn bench_probe(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_potential_match_moves");
    for size in [8u8, 16, 32] {
        let mut engine = half_filled(size);
        group.bench_function(format!("{size}x{size}"), |b| {
            b.iter(|| black_box(engine.find_potential_match_moves()))
        });
    }
    group.finish();
}

fn bench_computer_move(c: &mut Criterion) {
    let mut engine = half_filled(16);
    let mut heuristic = MoveHeuristic::new(1);
    c.bench_function("computer_move 16x16", |b| {
        b.iter(|| black_box(heuristic.computer_move(&mut engine)))
    });
}

criterion_group!(benches, bench_probe, bench_computer_move);
criterion_main!(benches);
