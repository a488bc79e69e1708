// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use floorplan_filter::{FavoriteSet, FilterEngine, FilterState, visible};
use floorplan_regions::RegionStore;
use serde_json::{Value, json};

const CATEGORIES: [&str; 6] = [
    "Tecnología",
    "IA & Datos",
    "Robótica",
    "Café",
    "Diseño",
    "General",
];

fn records(len: usize) -> Vec<Value> {
    (0..len)
        .map(|i| {
            let x = (i % 100) as f64 * 20.0;
            let y = (i / 100) as f64 * 20.0;
            json!({
                "id": format!("S{i:05}"),
                "name": format!("Stand número {i}"),
                "category": CATEGORIES[i % CATEGORIES.len()],
                "description": "Demostraciones en vivo y café de especialidad",
                "bounds": [x, y, x + 18.0, y + 18.0],
            })
        })
        .collect()
}

fn bench_visible(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter/visible");

    // Hypothesis: caching normalized haystacks in `FilterEngine` dominates
    // for text queries, while category-only filters are close either way.
    for len in [256usize, 2_048, 16_384] {
        let (store, _) = RegionStore::load(&records(len));
        let engine = FilterEngine::new(&store);
        let favorites: FavoriteSet = (0..len).step_by(7).map(|i| format!("S{i:05}")).collect();
        group.throughput(Throughput::Elements(len as u64));

        let states = [
            ("vacuous", FilterState::new()),
            ("category", FilterState::category_only("Café")),
            ("text", FilterState::new().with_query("numero 12")),
            ("favorites", FilterState::favorites_only().with_category("Robótica")),
        ];
        for (name, state) in &states {
            group.bench_with_input(
                BenchmarkId::new(format!("uncached/{name}"), len),
                state,
                |b, state| b.iter(|| black_box(visible(&store, &favorites, state).len())),
            );
            group.bench_with_input(
                BenchmarkId::new(format!("cached/{name}"), len),
                state,
                |b, state| {
                    b.iter(|| black_box(engine.visible_indices(&store, &favorites, state).len()));
                },
            );
        }
    }

    group.finish();
}

fn bench_build_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter/build");
    for len in [2_048usize, 16_384] {
        let (store, _) = RegionStore::load(&records(len));
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &store, |b, store| {
            b.iter(|| black_box(FilterEngine::new(store)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_visible, bench_build_engine);
criterion_main!(benches);
