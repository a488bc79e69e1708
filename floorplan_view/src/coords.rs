// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect};

/// Size of the backing floor-plan image in pixels.
///
/// In pixel space the image covers `(0, 0)-(width, height)`; in view space it
/// covers `(0, -height)-(width, 0)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageSpace {
    /// Image width in pixels.
    pub width: f64,
    /// Image height in pixels.
    pub height: f64,
}

impl ImageSpace {
    /// Creates an image space of the given size.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns the full image rectangle `(0, 0)-(width, height)` in pixel space.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Returns `true` if the image has no positive area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Builds a normalized bound from two corners given in any order.
///
/// The result always satisfies `x0 <= x1` and `y0 <= y1`.
#[must_use]
pub fn normalize_bounds(x1: f64, y1: f64, x2: f64, y2: f64) -> Rect {
    Rect::from_points((x1, y1), (x2, y2))
}

/// Transform between image-pixel space and view space.
///
/// Pixel rows increase downward; view "northing" increases upward. The
/// transform negates Y and leaves X unchanged. Negation never rounds, so the
/// mapping is its own inverse and every round trip is bit-exact. The plan's
/// top edge sits on the view X axis and the plan extends to `y = -height`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateSystem {
    image: ImageSpace,
}

impl CoordinateSystem {
    /// Creates a coordinate system for the given image.
    #[must_use]
    pub const fn new(image: ImageSpace) -> Self {
        Self { image }
    }

    /// Returns the image space this system was built for.
    #[must_use]
    pub fn image(&self) -> ImageSpace {
        self.image
    }

    /// Returns the whole plan as a view-space rectangle.
    #[must_use]
    pub fn image_view_rect(&self) -> Rect {
        self.to_view_rect(self.image.bounds())
    }

    /// Converts a pixel-space point into view space.
    #[must_use]
    pub fn pixel_to_view_point(&self, pt: Point) -> Point {
        Point::new(pt.x, -pt.y)
    }

    /// Converts a view-space point into pixel space.
    #[must_use]
    pub fn view_to_pixel_point(&self, pt: Point) -> Point {
        Point::new(pt.x, -pt.y)
    }

    /// Maps a pixel bound to its view-space rectangle.
    ///
    /// The input is normalized first, so corner order does not matter.
    #[must_use]
    pub fn to_view_rect(&self, bounds: Rect) -> Rect {
        let b = bounds.abs();
        Rect::new(b.x0, -b.y1, b.x1, -b.y0)
    }

    /// Maps a view-space rectangle back to its normalized pixel bound.
    ///
    /// This is the inverse of [`CoordinateSystem::to_view_rect`].
    #[must_use]
    pub fn to_pixel_bounds(&self, view_rect: Rect) -> Rect {
        let r = view_rect.abs();
        Rect::new(r.x0, -r.y1, r.x1, -r.y0)
    }

    /// Affine form of the pixel → view mapping.
    #[must_use]
    pub fn pixel_to_view(&self) -> Affine {
        Affine::FLIP_Y
    }

    /// Affine form of the view → pixel mapping.
    ///
    /// The Y reflection is an involution, so this equals
    /// [`CoordinateSystem::pixel_to_view`].
    #[must_use]
    pub fn view_to_pixel(&self) -> Affine {
        self.pixel_to_view()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{CoordinateSystem, ImageSpace, normalize_bounds};

    fn plan() -> CoordinateSystem {
        CoordinateSystem::new(ImageSpace::new(2000.0, 1200.0))
    }

    #[test]
    fn normalize_bounds_reorders_corners() {
        let r = normalize_bounds(300.0, 20.0, 100.0, 80.0);
        assert_eq!(r, Rect::new(100.0, 20.0, 300.0, 80.0));
        let r = normalize_bounds(10.0, 90.0, 40.0, 5.0);
        assert_eq!(r, Rect::new(10.0, 5.0, 40.0, 90.0));
    }

    #[test]
    fn view_rect_inverts_y_and_keeps_x() {
        let coords = plan();
        let view = coords.to_view_rect(Rect::new(100.0, 0.0, 250.0, 200.0));
        assert_eq!(view, Rect::new(100.0, -200.0, 250.0, 0.0));
    }

    #[test]
    fn view_rect_round_trips_exactly() {
        let coords = plan();
        let samples = [
            Rect::new(0.0, 0.0, 2000.0, 1200.0),
            Rect::new(12.5, 40.25, 19.75, 1100.5),
            Rect::new(1999.0, 1.0, 2000.0, 2.0),
            Rect::new(-50.0, -10.0, 30.0, 1300.0),
        ];
        for bounds in samples {
            let back = coords.to_pixel_bounds(coords.to_view_rect(bounds));
            assert_eq!(back, bounds, "round trip changed {bounds:?}");
        }
    }

    #[test]
    fn decimal_bounds_round_trip_exactly() {
        let coords = plan();
        let samples = [
            Rect::new(12.3, 45.6, 78.9, 101.1),
            Rect::new(0.1, 0.1, 0.2, 0.3),
            Rect::new(10.0, 5.0, 30.6, 20.3),
            Rect::new(1999.9, 1199.7, 1999.95, 1199.99),
        ];
        for bounds in samples {
            let back = coords.to_pixel_bounds(coords.to_view_rect(bounds));
            assert_eq!(back, bounds, "round trip changed {bounds:?}");
            let a = coords.view_to_pixel_point(coords.pixel_to_view_point(bounds.origin()));
            assert_eq!(a, bounds.origin(), "point round trip changed {bounds:?}");
        }
    }

    #[test]
    fn unnormalized_input_round_trips_to_normalized_bound() {
        let coords = plan();
        let raw = Rect::new(300.0, 80.0, 100.0, 20.0);
        let back = coords.to_pixel_bounds(coords.to_view_rect(raw));
        assert_eq!(back, Rect::new(100.0, 20.0, 300.0, 80.0));
    }

    #[test]
    fn point_and_affine_forms_agree() {
        let coords = plan();
        let px = Point::new(42.0, 300.0);
        let view = coords.pixel_to_view_point(px);
        assert_eq!(view, Point::new(42.0, -300.0));
        assert_eq!(coords.pixel_to_view() * px, view);
        assert_eq!(coords.view_to_pixel_point(view), px);
        assert_eq!(coords.view_to_pixel() * view, px);
    }

    #[test]
    fn image_space_emptiness() {
        assert!(ImageSpace::new(0.0, 10.0).is_empty());
        assert!(ImageSpace::new(10.0, -1.0).is_empty());
        assert!(!ImageSpace::new(1.0, 1.0).is_empty());
        assert_eq!(plan().image_view_rect(), Rect::new(0.0, -1200.0, 2000.0, 0.0));
    }
}
