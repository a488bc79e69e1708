// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::normalize::normalize_text;

/// Query prefix that restricts the result to favorites.
pub const FAVORITES_PREFIX: &str = "fav:";

/// Category value that disables the category filter.
pub const ALL_CATEGORIES: &str = "all";

/// Category half of the filter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Keep every category.
    #[default]
    All,
    /// Keep only stands whose category equals this value exactly.
    Exact(String),
}

impl CategoryFilter {
    /// Parses the string form used by category pickers.
    ///
    /// `"all"` means [`CategoryFilter::All`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Exact(value.to_owned())
        }
    }

    /// Returns the string form, `"all"` for [`CategoryFilter::All`].
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Exact(value) => value,
        }
    }

    /// Returns `true` if `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exact(value) => value == category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

/// The query half of the filter after normalization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Query {
    /// Empty after trimming: everything matches.
    Any,
    /// Starts with `fav:`; the remainder is ignored.
    Favorites,
    /// Normalized substring to look for.
    Text(String),
}

impl Query {
    /// Trims, normalizes, and classifies raw query text.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let normalized = normalize_text(raw.trim());
        if normalized.is_empty() {
            Self::Any
        } else if normalized.starts_with(FAVORITES_PREFIX) {
            Self::Favorites
        } else {
            Self::Text(normalized)
        }
    }
}

/// User-controlled filter inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Raw query text as typed.
    pub query: String,
    /// Category selection.
    pub category: CategoryFilter,
}

impl FilterState {
    /// Creates the vacuous filter: empty query, all categories.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this state with the given query text.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Returns this state with the given category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// The "favorites" quick chip: all categories, `fav:` query.
    #[must_use]
    pub fn favorites_only() -> Self {
        Self {
            query: FAVORITES_PREFIX.to_owned(),
            category: CategoryFilter::All,
        }
    }

    /// A category quick chip: that category, query cleared.
    #[must_use]
    pub fn category_only(category: impl Into<CategoryFilter>) -> Self {
        Self {
            query: String::new(),
            category: category.into(),
        }
    }

    /// Changes the category the way a category picker does.
    ///
    /// A pending `fav:` query is dropped, since picking a category means the
    /// user left the favorites view. Any other query is kept.
    pub fn switch_category(&mut self, category: impl Into<CategoryFilter>) {
        if self.parsed_query() == Query::Favorites {
            self.query.clear();
        }
        self.category = category.into();
    }

    /// Returns the normalized form of the query.
    #[must_use]
    pub fn parsed_query(&self) -> Query {
        Query::parse(&self.query)
    }

    /// Returns `true` if this state matches every stand.
    #[must_use]
    pub fn is_vacuous(&self) -> bool {
        self.category == CategoryFilter::All && self.parsed_query() == Query::Any
    }
}
