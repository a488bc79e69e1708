// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashSet;

/// Set of favorite stand ids.
///
/// The set is injected by the caller, which also owns its persistence. Ids
/// need not exist in the current store; unknown ids simply never match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: HashSet<String>,
}

impl FavoriteSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `id` is a favorite.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Adds `id`; returns `true` if it was not already present.
    pub fn insert(&mut self, id: impl Into<String>) -> bool {
        self.ids.insert(id.into())
    }

    /// Removes `id`; returns `true` if it was present.
    pub fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    /// Flips membership of `id` and returns the new membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_owned());
            true
        }
    }

    /// Number of favorites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if there are no favorites.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates over the ids in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.ids.iter().map(String::as_str)
    }

    /// Returns the ids sorted, for stable persistence.
    #[must_use]
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.ids.iter().cloned().collect();
        ids.sort_unstable();
        ids
    }
}

impl<S: Into<String>> FromIterator<S> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for FavoriteSet {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.ids.extend(iter.into_iter().map(Into::into));
    }
}
