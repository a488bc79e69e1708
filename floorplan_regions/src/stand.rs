// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// A labeled rectangular region on the floor plan.
///
/// `bounds` is in image-pixel space and always normalized
/// (`x0 <= x1`, `y0 <= y1`).
#[derive(Clone, Debug, PartialEq)]
pub struct Stand {
    /// Unique, non-empty primary key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category label, compared case-sensitively.
    pub category: String,
    /// Free-form description.
    pub description: String,
    /// Free-form note.
    pub note: String,
    /// Opaque identifier used by external QR/AR links.
    pub token: String,
    /// Normalized pixel bound.
    pub bounds: Rect,
}

impl Stand {
    /// Returns `true` if `pt` (in pixel space) lies inside or on the edge of the bound.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        let b = self.bounds;
        pt.x >= b.x0 && pt.x <= b.x1 && pt.y >= b.y0 && pt.y <= b.y1
    }
}
