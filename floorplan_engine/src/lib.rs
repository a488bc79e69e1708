// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floorplan Engine: one interactive floor-plan session.
//!
//! [`Engine`] ties the building blocks together:
//!
//! - `floorplan_regions` ingests the record set into a store.
//! - `floorplan_filter` keeps the visible subset current as the query,
//!   category, and favorites change.
//! - `floorplan_selection` tracks the focused stand and the admin
//!   two-corner capture.
//! - `floorplan_style` turns each stand's state into a render style.
//! - `floorplan_view` maps between pixel, view, and device space and frames
//!   focused stands in the viewport.
//!
//! The engine is synchronous and owns no I/O. The host fetches the record
//! set, passes the outcome to [`Engine::apply_load`], forwards clicks and
//! query edits (with explicit timestamps), and drains [`EngineEvent`]s to
//! update the UI.
//!
//! ## Minimal example
//!
//! ```rust
//! use floorplan_engine::{ClickOutcome, Engine, EngineConfig, EngineEvent};
//! use kurbo::Point;
//!
//! let mut engine = Engine::new(EngineConfig::default()).unwrap();
//! engine.set_deep_link("B01");
//! engine
//!     .load_json(r#"{
//!         "image": { "url": "plan.png", "width": 2000, "height": 1200 },
//!         "stands": [
//!             { "id": "A01", "name": "Robots", "category": "Tech",
//!               "bounds": [100, 100, 300, 200] },
//!             { "id": "B01", "name": "Café", "category": "Food", "bounds": [400, 100, 600, 200] }
//!         ]
//!     }"#)
//!     .unwrap();
//!
//! // The deep link was applied once the store loaded.
//! assert_eq!(engine.focused().map(|s| s.id.as_str()), Some("B01"));
//!
//! // Clicks arrive in pixel space here; `click` takes view space.
//! assert_eq!(engine.click_pixel(Point::new(150.0, 150.0)), ClickOutcome::Selected("A01".into()));
//!
//! let focused: Vec<_> = engine
//!     .drain_events()
//!     .into_iter()
//!     .filter_map(|e| match e {
//!         EngineEvent::Focused { summary, .. } => Some(summary.title),
//!         _ => None,
//!     })
//!     .collect();
//! assert_eq!(focused, ["B01 — Café", "A01 — Robots"]);
//! ```

mod config;
mod debounce;
mod engine;
mod error;
mod events;
mod summary;

pub use config::{
    CaptureConfig, CaptureSource, ColorValue, EngineConfig, FilterConfig, ImageConfig, LinkConfig,
    StyleConfig, ViewConfig,
};
pub use debounce::QueryDebouncer;
pub use engine::{CaptureStart, ClickOutcome, Engine};
pub use error::{ConfigError, EngineError};
pub use events::EngineEvent;
pub use summary::StandSummary;
