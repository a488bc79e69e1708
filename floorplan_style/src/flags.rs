// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

bitflags::bitflags! {
    /// Per-region state consulted by the resolver.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct StyleFlags: u8 {
        /// The region passes the current filter.
        const VISIBLE = 1;
        /// The region is a favorite.
        const FAVORITE = 1 << 1;
        /// The region is focused.
        const SELECTED = 1 << 2;
    }
}

impl StyleFlags {
    /// Builds flags from the three booleans.
    #[must_use]
    pub fn from_state(visible: bool, favorite: bool, selected: bool) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::VISIBLE, visible);
        flags.set(Self::FAVORITE, favorite);
        flags.set(Self::SELECTED, selected);
        flags
    }
}
