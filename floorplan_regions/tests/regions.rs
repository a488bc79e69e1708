// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `floorplan_regions` crate.
//!
//! These cover whole-document ingestion, the normalization guarantee on
//! bounds, and the export round trip.

use floorplan_regions::{RegionStore, StandRecord};
use serde_json::json;

const SAMPLE: &str = r#"{
  "image": { "url": "./assets/plan.png", "width": 2000, "height": 1200 },
  "stands": [
    { "id": "A01", "name": "Vision Lab", "category": "IA & Datos", "token": "tok-a01",
      "bounds": [120, 80, 320, 220], "description": "Computer vision demos", "note": "Hall 1" },
    { "id": "A02", "name": "Café Robótico", "category": "Food",
      "bounds": [600, 400, 450, 300] },
    { "id": "", "bounds": [0, 0, 1, 1] },
    { "id": "A03", "category": "IA & Datos", "bounds": [1, 2, 3] },
    { "id": "B01", "name": "Maker Space", "category": "Hardware", "desc": "3D printing",
      "bounds": [900.5, 1000, 700.25, 800] }
  ]
}"#;

#[test]
fn sample_document_loads_partially() {
    let loaded = RegionStore::from_json_str(SAMPLE).unwrap();
    let image = loaded.image.unwrap();
    assert_eq!(image.url, "./assets/plan.png");
    assert_eq!(image.image_space().width, 2000.0);

    let ids: Vec<_> = loaded.store.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["A01", "A02", "B01"]);

    let rejected: Vec<_> = loaded.report.rejected.iter().map(|r| r.index).collect();
    assert_eq!(rejected, [2, 3]);

    let b01 = loaded.store.get("B01").unwrap();
    assert_eq!(b01.description, "3D printing");
    assert_eq!(b01.token, "B01");
}

#[test]
fn every_corner_order_normalizes() {
    let corners = [(10.0, 20.0), (30.0, 5.0)];
    let orders = [
        [corners[0].0, corners[0].1, corners[1].0, corners[1].1],
        [corners[1].0, corners[1].1, corners[0].0, corners[0].1],
        [corners[0].0, corners[1].1, corners[1].0, corners[0].1],
        [corners[1].0, corners[0].1, corners[0].0, corners[1].1],
    ];
    let records: Vec<_> = orders
        .iter()
        .enumerate()
        .map(|(i, b)| json!({ "id": format!("s{i}"), "bounds": b }))
        .collect();
    let (store, report) = RegionStore::load(&records);
    assert!(report.is_clean());
    for stand in &store {
        let b = stand.bounds;
        assert!(b.x0 <= b.x1 && b.y0 <= b.y1, "{} not normalized", stand.id);
        assert_eq!((b.x0, b.y0, b.x1, b.y1), (10.0, 5.0, 30.0, 20.0));
    }
}

#[test]
fn export_round_trips_to_an_equal_store() {
    let loaded = RegionStore::from_json_str(SAMPLE).unwrap();
    let exported = loaded.store.to_json_pretty().unwrap();

    let reloaded = RegionStore::from_json_str(&exported).unwrap();
    assert!(reloaded.report.is_clean());
    assert_eq!(reloaded.store.all(), loaded.store.all());

    let records: Vec<StandRecord> = serde_json::from_str(&exported).unwrap();
    assert_eq!(records, loaded.store.to_records());
    assert_eq!(records[1].bounds, [450.0, 300.0, 600.0, 400.0]);
}
