// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How fitted content should be positioned inside the device viewport.
///
/// This mode is consulted by [`crate::fit_transform`] and
/// [`crate::MapViewport::fit_rect`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FitMode {
    /// Center the fitted rectangle within the viewport.
    #[default]
    Center,
    /// Align the top-left corner of the fitted rectangle with the viewport origin.
    ///
    /// "Top" is the view-space maximum Y, which lands on the smallest device row.
    AlignMin,
}
