// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use floorplan_engine::{Engine, EngineConfig};
use floorplan_regions::RegionStore;
use floorplan_style::{StyleFlags, StyleResolver};
use kurbo::Point;
use serde_json::json;

fn plan(len: usize) -> String {
    let stands: Vec<_> = (0..len)
        .map(|i| {
            let x = (i % 100) as f64 * 20.0;
            let y = (i / 100) as f64 * 20.0;
            json!({
                "id": format!("S{i:05}"),
                "name": format!("Stand {i}"),
                "category": if i % 2 == 0 { "Even" } else { "Odd" },
                "bounds": [x + 18.0, y + 18.0, x, y],
            })
        })
        .collect();
    json!({ "image": { "url": "plan.png", "width": 2000, "height": 2000 }, "stands": stands })
        .to_string()
}

fn bench_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("regions/from_json_str");
    for len in [256usize, 4_096] {
        let text = plan(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &text, |b, text| {
            b.iter(|| black_box(RegionStore::from_json_str(text).map(|l| l.store.len())));
        });
    }
    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("regions/hit_test");
    let probes: Vec<Point> = (0..64)
        .map(|i| Point::new(f64::from(i) * 31.0 % 2000.0, f64::from(i) * 17.0 % 2000.0))
        .collect();

    // Linear scan: cost grows with the store, not with the number of hits.
    for len in [256usize, 4_096] {
        let store = RegionStore::from_json_str(&plan(len))
            .expect("generated plan is valid")
            .store;
        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_with_input(BenchmarkId::new("store", len), &store, |b, store| {
            b.iter(|| {
                probes
                    .iter()
                    .filter(|p| store.hit_test(**p).is_some())
                    .count()
            });
        });

        let text = plan(len);
        group.bench_with_input(BenchmarkId::new("engine_click", len), &text, |b, text| {
            b.iter_batched(
                || {
                    let mut engine =
                        Engine::new(EngineConfig::default()).expect("default config is valid");
                    let _ = engine.load_json(text);
                    engine
                },
                |mut engine| {
                    for p in &probes {
                        black_box(engine.click_pixel(*p));
                    }
                    engine
                },
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_styles(c: &mut Criterion) {
    let resolver = StyleResolver::default();
    c.bench_function("style/resolve_all_flags", |b| {
        b.iter(|| {
            for bits in 0..8_u8 {
                black_box(resolver.resolve(StyleFlags::from_bits_truncate(bits)));
            }
        });
    });

    let mut engine = Engine::new(EngineConfig::default()).expect("default config is valid");
    let _ = engine.load_json(&plan(4_096));
    engine.select("S00042");
    c.bench_function("style/engine_styles_4096", |b| {
        b.iter(|| black_box(engine.styles().len()));
    });
}

criterion_group!(benches, bench_load, bench_hit_test, bench_styles);
criterion_main!(benches);
