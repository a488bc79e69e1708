// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Vec2};

use crate::modes::FitMode;

/// Margin added around a rectangle before it is fitted.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Padding {
    /// Expand every side by a fixed amount of pixel units.
    Units(f64),
    /// Expand each side by a fraction of the rectangle's own extent.
    ///
    /// `Ratio(0.25)` grows a 100×40 rect by 25 on the left and right and by 10
    /// on the top and bottom.
    Ratio(f64),
}

impl Default for Padding {
    fn default() -> Self {
        Self::Units(0.0)
    }
}

impl Padding {
    /// Returns `rect` (normalized) expanded by this padding.
    ///
    /// Negative or NaN amounts are treated as zero.
    #[must_use]
    pub fn apply(self, rect: Rect) -> Rect {
        let rect = rect.abs();
        let (dx, dy) = match self {
            Self::Units(p) => {
                let p = non_negative(p);
                (p, p)
            }
            Self::Ratio(r) => {
                let r = non_negative(r);
                (rect.width() * r, rect.height() * r)
            }
        };
        rect.inflate(dx, dy)
    }
}

fn non_negative(v: f64) -> f64 {
    if v > 0.0 { v } else { 0.0 }
}

/// Options for [`fit_transform`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FitOptions {
    /// Margin around the fitted rectangle.
    pub padding: Padding,
    /// Optional ceiling on the resulting zoom.
    pub max_zoom: Option<f64>,
    /// Placement of the fitted rectangle inside the viewport.
    pub mode: FitMode,
}

/// A uniform pan + zoom mapping view space into a device viewport.
///
/// `device = pan + zoom * (x, -y)`: device rows grow downward while view
/// northing grows upward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewFit {
    /// Device-space position of the view-space origin.
    pub pan: Vec2,
    /// Device pixels per view unit.
    pub zoom: f64,
}

impl ViewFit {
    /// Identity-scale fit with the view origin at `pan`.
    #[must_use]
    pub const fn new(pan: Vec2, zoom: f64) -> Self {
        Self { pan, zoom }
    }

    /// Builds the fit that places `view_center` at `device_center` with the given zoom.
    #[must_use]
    pub fn centered(view_center: Point, device_center: Point, zoom: f64) -> Self {
        let pan = Vec2::new(
            device_center.x - zoom * view_center.x,
            device_center.y + zoom * view_center.y,
        );
        Self { pan, zoom }
    }

    /// Affine mapping view space into device space.
    #[must_use]
    pub fn view_to_device(&self) -> Affine {
        Affine::new([self.zoom, 0.0, 0.0, -self.zoom, self.pan.x, self.pan.y])
    }

    /// Affine mapping device space into view space.
    #[must_use]
    pub fn device_to_view(&self) -> Affine {
        self.view_to_device().inverse()
    }

    /// Converts a view-space point into device coordinates.
    #[must_use]
    pub fn view_to_device_point(&self, pt: Point) -> Point {
        self.view_to_device() * pt
    }

    /// Converts a device-space point into view coordinates.
    #[must_use]
    pub fn device_to_view_point(&self, pt: Point) -> Point {
        self.device_to_view() * pt
    }

    /// Converts a view-space rectangle into a normalized device rectangle.
    #[must_use]
    pub fn view_to_device_rect(&self, rect: Rect) -> Rect {
        let a = self.view_to_device_point(Point::new(rect.x0, rect.y0));
        let b = self.view_to_device_point(Point::new(rect.x1, rect.y1));
        Rect::from_points(a, b)
    }

    /// Returns the view-space rectangle visible through `viewport`.
    #[must_use]
    pub fn visible_view_rect(&self, viewport: Rect) -> Rect {
        let a = self.device_to_view_point(Point::new(viewport.x0, viewport.y0));
        let b = self.device_to_view_point(Point::new(viewport.x1, viewport.y1));
        Rect::from_points(a, b)
    }
}

/// Computes the pan/zoom that frames `view_rect` inside `viewport`.
///
/// The rectangle is expanded by `options.padding` and then scaled by the
/// smallest zoom at which it is fully contained in the viewport, preserving
/// aspect ratio. If `options.max_zoom` is set the zoom is clamped to it.
///
/// Returns `None` when the viewport has no area, or when the padded rectangle
/// collapses to a point and no `max_zoom` bounds the result.
#[must_use]
pub fn fit_transform(view_rect: Rect, viewport: Rect, options: FitOptions) -> Option<ViewFit> {
    let viewport = viewport.abs();
    let (vw, vh) = (viewport.width(), viewport.height());
    if !(vw > 0.0 && vh > 0.0) {
        return None;
    }

    let target = options.padding.apply(view_rect);
    let (w, h) = (target.width(), target.height());
    let mut zoom = match (w > 0.0, h > 0.0) {
        (true, true) => (vw / w).min(vh / h),
        (true, false) => vw / w,
        (false, true) => vh / h,
        (false, false) => f64::INFINITY,
    };
    if let Some(max_zoom) = options.max_zoom {
        zoom = zoom.min(max_zoom);
    }
    if !(zoom.is_finite() && zoom > 0.0) {
        return None;
    }

    let fit = match options.mode {
        FitMode::Center => ViewFit::centered(target.center(), viewport.center(), zoom),
        FitMode::AlignMin => ViewFit {
            // The top-left of the target is (x0, y1) in view space.
            pan: Vec2::new(viewport.x0 - zoom * target.x0, viewport.y0 + zoom * target.y1),
            zoom,
        },
    };
    Some(fit)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::{FitOptions, Padding, ViewFit, fit_transform};
    use crate::modes::FitMode;

    fn contains_with_slack(outer: Rect, inner: Rect) -> bool {
        outer.x0 <= inner.x0 + 1e-9
            && outer.y0 <= inner.y0 + 1e-9
            && outer.x1 >= inner.x1 - 1e-9
            && outer.y1 >= inner.y1 - 1e-9
    }

    #[test]
    fn padded_rect_is_contained_and_centered() {
        let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
        let region = Rect::new(100.0, 900.0, 300.0, 1000.0);
        let options = FitOptions {
            padding: Padding::Units(20.0),
            ..FitOptions::default()
        };
        let fit = fit_transform(region, viewport, options).unwrap();

        // 240x140 padded rect: width is the binding dimension.
        assert!((fit.zoom - 800.0 / 240.0).abs() < 1e-12);

        let padded = Rect::new(80.0, 880.0, 320.0, 1020.0);
        let device = fit.view_to_device_rect(padded);
        assert!(contains_with_slack(viewport, device));

        let center = fit.view_to_device_point(region.center());
        assert!((center.x - 400.0).abs() < 1e-9);
        assert!((center.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn max_zoom_clamps_small_regions() {
        let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
        let region = Rect::new(10.0, 10.0, 12.0, 11.0);
        let options = FitOptions {
            max_zoom: Some(4.0),
            ..FitOptions::default()
        };
        let fit = fit_transform(region, viewport, options).unwrap();
        assert_eq!(fit.zoom, 4.0);
        let center = fit.view_to_device_point(region.center());
        assert!((center - viewport.center()).hypot() < 1e-9);
    }

    #[test]
    fn ratio_padding_scales_with_extent() {
        let padded = Padding::Ratio(0.25).apply(Rect::new(0.0, 0.0, 100.0, 40.0));
        assert_eq!(padded, Rect::new(-25.0, -10.0, 125.0, 50.0));
        let unchanged = Padding::Units(-5.0).apply(Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(unchanged, Rect::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn degenerate_inputs_have_no_fit() {
        let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
        let point = Rect::new(5.0, 5.0, 5.0, 5.0);
        assert!(fit_transform(point, viewport, FitOptions::default()).is_none());
        assert!(fit_transform(point, Rect::ZERO, FitOptions::default()).is_none());

        // Padding gives a point some extent.
        let options = FitOptions {
            padding: Padding::Units(10.0),
            ..FitOptions::default()
        };
        let fit = fit_transform(point, viewport, options).unwrap();
        assert!((fit.zoom - 30.0).abs() < 1e-12);
    }

    #[test]
    fn align_min_puts_top_left_at_origin() {
        let viewport = Rect::new(50.0, 20.0, 450.0, 220.0);
        let region = Rect::new(0.0, 0.0, 200.0, 100.0);
        let options = FitOptions {
            mode: FitMode::AlignMin,
            ..FitOptions::default()
        };
        let fit = fit_transform(region, viewport, options).unwrap();
        let top_left = fit.view_to_device_point(Point::new(0.0, 100.0));
        assert!((top_left.x - 50.0).abs() < 1e-9);
        assert!((top_left.y - 20.0).abs() < 1e-9);
    }

    #[test]
    fn device_view_round_trip_and_visible_rect() {
        let fit = ViewFit::centered(Point::new(1000.0, 600.0), Point::new(400.0, 300.0), 0.5);
        let p = Point::new(123.0, 456.0);
        let back = fit.device_to_view_point(fit.view_to_device_point(p));
        assert!((back - p).hypot() < 1e-9);

        let visible = fit.visible_view_rect(Rect::new(0.0, 0.0, 800.0, 600.0));
        assert!((visible.x0 - 200.0).abs() < 1e-9);
        assert!((visible.x1 - 1800.0).abs() < 1e-9);
        assert!((visible.y0 - 0.0).abs() < 1e-9);
        assert!((visible.y1 - 1200.0).abs() < 1e-9);
    }
}
