use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use minefield_core::*;

fn flood_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_reveal");

    for size in [8, 32, 128] {
        let corner = size - 1;
        let layout = MineLayout::from_mine_coords(size, &[(corner, corner)]).unwrap();

        group.bench_function(format!("{size}x{size}"), |b| {
            b.iter_batched(
                || BoardEngine::with_layout(layout.clone()),
                |mut engine| black_box(engine.reveal((0, 0))),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn random_layout(c: &mut Criterion) {
    c.bench_function("random_layout_standard", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            black_box(RandomLayoutGenerator::new(seed).generate(GameConfig::STANDARD))
        })
    });
}

criterion_group!(benches, flood_reveal, random_layout);
criterion_main!(benches);
