// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use floorplan_regions::{RegionStore, Stand};

use crate::favorites::FavoriteSet;
use crate::normalize::normalize_text;
use crate::state::{FilterState, Query};

/// Counts shown next to the list of stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Stands passing the current filter.
    pub shown: usize,
    /// Stands in the store.
    pub total: usize,
    /// Size of the favorite set.
    pub favorites: usize,
}

fn haystack(stand: &Stand) -> String {
    normalize_text(&format!(
        "{} {} {} {}",
        stand.id, stand.name, stand.category, stand.description
    ))
}

fn passes(
    stand: &Stand,
    haystack: &str,
    favorites: &FavoriteSet,
    state: &FilterState,
    query: &Query,
) -> bool {
    if !state.category.matches(&stand.category) {
        return false;
    }
    match query {
        Query::Any => true,
        Query::Favorites => favorites.contains(&stand.id),
        Query::Text(needle) => haystack.contains(needle.as_str()),
    }
}

/// Returns the stands passing `state`, in store order.
///
/// This normalizes every stand's searchable text on each call. When the
/// same store is filtered repeatedly, build a [`FilterEngine`] once instead.
#[must_use]
pub fn visible<'a>(
    store: &'a RegionStore,
    favorites: &FavoriteSet,
    state: &FilterState,
) -> Vec<&'a Stand> {
    let query = state.parsed_query();
    store
        .iter()
        .filter(|stand| passes(stand, &haystack(stand), favorites, state, &query))
        .collect()
}

/// Filter over one store with the searchable text of every stand cached.
///
/// The cache is positional: it must be rebuilt whenever the store changes.
#[derive(Clone, Debug, Default)]
pub struct FilterEngine {
    haystacks: Vec<String>,
}

impl FilterEngine {
    /// Normalizes the searchable text of every stand in `store`.
    #[must_use]
    pub fn new(store: &RegionStore) -> Self {
        Self {
            haystacks: store.iter().map(haystack).collect(),
        }
    }

    /// Number of stands this engine was built for.
    #[must_use]
    pub fn len(&self) -> usize {
        self.haystacks.len()
    }

    /// Returns `true` if this engine was built for an empty store.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.haystacks.is_empty()
    }

    /// Returns the store positions of the stands passing `state`, ascending.
    ///
    /// `store` must be the store this engine was built for.
    #[must_use]
    pub fn visible_indices(
        &self,
        store: &RegionStore,
        favorites: &FavoriteSet,
        state: &FilterState,
    ) -> Vec<usize> {
        debug_assert_eq!(
            self.haystacks.len(),
            store.len(),
            "filter engine built for a different store"
        );
        let query = state.parsed_query();
        store
            .iter()
            .zip(&self.haystacks)
            .enumerate()
            .filter(|(_, (stand, hay))| passes(stand, hay, favorites, state, &query))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Returns the stands passing `state`, in store order.
    #[must_use]
    pub fn visible<'a>(
        &self,
        store: &'a RegionStore,
        favorites: &FavoriteSet,
        state: &FilterState,
    ) -> Vec<&'a Stand> {
        self.visible_indices(store, favorites, state)
            .into_iter()
            .map(|idx| &store.all()[idx])
            .collect()
    }
}

/// Returns the store's categories sorted for display.
///
/// Ordering ignores case and diacritics; ties fall back to the raw value.
#[must_use]
pub fn sorted_categories(store: &RegionStore) -> Vec<&str> {
    let mut categories = store.categories();
    categories.sort_by_cached_key(|c| (normalize_text(c), (*c).to_owned()));
    categories
}

#[cfg(test)]
mod tests {
    use floorplan_regions::RegionStore;
    use serde_json::json;

    use super::{FilterEngine, sorted_categories, visible};
    use crate::favorites::FavoriteSet;
    use crate::state::FilterState;

    fn store() -> RegionStore {
        let records = [
            json!({ "id": "A01", "name": "Vision Lab", "category": "Tech", "bounds": [0, 0, 1, 1],
                    "description": "Cámaras térmicas" }),
            json!({ "id": "A02", "name": "Café", "category": "Food", "bounds": [0, 0, 1, 1] }),
            json!({ "id": "B01", "name": "Robots", "category": "Tech", "bounds": [0, 0, 1, 1] }),
        ];
        RegionStore::load(&records).0
    }

    #[test]
    fn query_searches_id_name_category_and_description() {
        let store = store();
        let favs = FavoriteSet::new();
        let ids = |q: &str| -> Vec<String> {
            visible(&store, &favs, &FilterState::new().with_query(q))
                .into_iter()
                .map(|s| s.id.clone())
                .collect()
        };
        assert_eq!(ids("a0"), ["A01", "A02"]);
        assert_eq!(ids("CAFE"), ["A02"]);
        assert_eq!(ids("termicas"), ["A01"]);
        assert_eq!(ids("tech"), ["A01", "B01"]);
        assert_eq!(ids("lab tech"), ["A01"]);
        assert!(ids("zzz").is_empty());
    }

    #[test]
    fn cached_engine_agrees_with_direct_filtering() {
        let store = store();
        let favs: FavoriteSet = ["B01", "A02"].into_iter().collect();
        let engine = FilterEngine::new(&store);
        assert_eq!(engine.len(), 3);
        let states = [
            FilterState::new(),
            FilterState::new().with_query("robots"),
            FilterState::favorites_only(),
            FilterState::favorites_only().with_category("Tech"),
            FilterState::category_only("Food"),
        ];
        for state in &states {
            let direct = visible(&store, &favs, state);
            let cached = engine.visible(&store, &favs, state);
            assert_eq!(direct, cached, "mismatch for {state:?}");
        }
        assert_eq!(
            engine.visible_indices(&store, &favs, &FilterState::favorites_only()),
            [1, 2]
        );
    }

    #[test]
    fn categories_sort_for_display() {
        let records = [
            json!({ "id": "1", "category": "zoo", "bounds": [0, 0, 1, 1] }),
            json!({ "id": "2", "category": "Él", "bounds": [0, 0, 1, 1] }),
            json!({ "id": "3", "category": "apps", "bounds": [0, 0, 1, 1] }),
        ];
        let store = RegionStore::load(&records).0;
        assert_eq!(sorted_categories(&store), ["apps", "Él", "zoo"]);
    }
}
