// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floorplan Regions: the authoritative collection of stands on a floor plan.
//!
//! A **stand** is a named, axis-aligned rectangle in image-pixel space plus
//! descriptive metadata. Stands arrive as loosely typed JSON records; this
//! crate decodes each record into a typed [`Stand`] or an explicit
//! [`Rejection`], so a single bad record never fails a whole load.
//!
//! - [`RegionStore::load`] ingests raw records and returns the store together
//!   with a [`LoadReport`] of dropped records.
//! - [`RegionStore::from_json_str`] parses a whole record set document.
//! - [`RegionStore::get`], [`RegionStore::all`], [`RegionStore::categories`]
//!   answer queries; [`RegionStore::hit_test`] finds the stand under a point.
//! - [`RegionStore::to_records`] exports the store back to the record shape.
//!
//! ## Minimal example
//!
//! ```rust
//! use floorplan_regions::RegionStore;
//!
//! let json = r#"{
//!   "image": { "url": "plan.png", "width": 2000, "height": 1200 },
//!   "stands": [
//!     { "id": "A01", "name": "Robotics", "category": "Tech", "bounds": [300, 80, 100, 20] },
//!     { "name": "no id", "bounds": [0, 0, 1, 1] }
//!   ]
//! }"#;
//!
//! let loaded = RegionStore::from_json_str(json).unwrap();
//! assert_eq!(loaded.store.len(), 1);
//! assert_eq!(loaded.report.rejected_count(), 1);
//!
//! let stand = loaded.store.get("A01").unwrap();
//! assert_eq!(stand.bounds.x0, 100.0);
//! assert_eq!(stand.bounds.x1, 300.0);
//! ```
//!
//! The store is load-once: there are no insert or remove operations after
//! construction. The region count is bounded by an exhibit floor, so queries
//! are plain linear scans.

mod error;
mod record;
mod stand;
mod store;

pub use error::{LoadError, LoadReport, RejectReason, Rejection};
pub use record::{ImageSpec, StandRecord};
pub use stand::Stand;
pub use store::{LoadedRecords, RegionStore};
