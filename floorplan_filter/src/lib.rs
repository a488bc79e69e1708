// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floorplan Filter: derive the visible subset of stands.
//!
//! Visibility is the conjunction of two filters:
//! - a **category** filter, either `all` or an exact, case-sensitive match;
//! - a **query**, normalized (trimmed, lower-cased, diacritics removed) and
//!   either the `fav:` prefix, which keeps only favorites, or a substring
//!   searched in each stand's id, name, category, and description.
//!
//! The result always preserves store order.
//!
//! ## Minimal example
//!
//! ```rust
//! use floorplan_filter::{FavoriteSet, FilterState, visible};
//! use floorplan_regions::RegionStore;
//!
//! let json = r#"[
//!   { "id": "A1", "name": "Café", "category": "Food", "bounds": [0, 0, 1, 1] },
//!   { "id": "B1", "name": "Robots", "category": "Tech", "bounds": [2, 0, 3, 1] }
//! ]"#;
//! let store = RegionStore::from_json_str(json).unwrap().store;
//! let favorites = FavoriteSet::from_iter(["B1"]);
//!
//! let hits = visible(&store, &favorites, &FilterState::default().with_query("cafe"));
//! assert_eq!(hits[0].id, "A1");
//!
//! let favs = visible(&store, &favorites, &FilterState::favorites_only());
//! assert_eq!(favs.len(), 1);
//! ```

mod favorites;
mod filter;
mod normalize;
mod state;

pub use favorites::FavoriteSet;
pub use filter::{FilterEngine, FilterStats, sorted_categories, visible};
pub use normalize::normalize_text;
pub use state::{ALL_CATEGORIES, CategoryFilter, FAVORITES_PREFIX, FilterState, Query};
