//! Performance measurement for table construction and the frame cycle

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use scrolltile::algorithm::{RowSampler, ScrollGenerator};
use scrolltile::analysis::TransitionTable;
use scrolltile::analysis::level::LevelGrid;
use scrolltile::io::configuration::DEFAULT_LEVEL;
use std::hint::black_box;

/// Repeat the built-in level vertically to the requested number of copies
fn stacked_level(copies: usize) -> String {
    let mut text = String::new();
    for _ in 0..copies {
        text.push_str(DEFAULT_LEVEL);
        text.push('\n');
    }
    text
}

/// Measures table construction cost as the level height grows
fn bench_table_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_construction");

    for copies in &[1usize, 8, 64] {
        let Ok(level) = LevelGrid::from_text(&stacked_level(*copies)) else {
            group.finish();
            return;
        };

        group.bench_with_input(BenchmarkId::from_parameter(copies), copies, |b, _| {
            b.iter(|| TransitionTable::build(black_box(&level)));
        });
    }

    group.finish();
}

/// Measures a full fill plus a batch of frame cycles without encoding
fn bench_fill_and_frames(c: &mut Criterion) {
    c.bench_function("fill_and_100_frames", |b| {
        b.iter(|| {
            let Ok(level) = LevelGrid::from_text(DEFAULT_LEVEL) else {
                return;
            };
            let Ok(table) = TransitionTable::build(&level) else {
                return;
            };
            let Ok(mut generator) = ScrollGenerator::new(table, 50, RowSampler::seeded(12345))
            else {
                return;
            };

            generator.fill();
            for _ in 0..100 {
                generator.advance();
            }

            let solid: u32 = generator
                .buffer()
                .cells()
                .iter()
                .map(|&cell| u32::from(cell))
                .sum();
            black_box(solid);
        });
    });
}

criterion_group!(benches, bench_table_construction, bench_fill_and_frames);
criterion_main!(benches);
