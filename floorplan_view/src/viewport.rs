// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

use crate::fit::{FitOptions, Padding, ViewFit, fit_transform};
use crate::modes::FitMode;

/// Camera over the view-space plane shown in a device viewport.
///
/// `MapViewport` tracks the device rectangle and the current [`ViewFit`].
/// It can be used to:
/// - Convert pointer positions between device and view space.
/// - Fit a region (or the whole plan) into the device rect.
/// - Zoom around an anchor while honoring zoom limits.
#[derive(Clone, Debug)]
pub struct MapViewport {
    device_rect: Rect,
    fit: ViewFit,
    min_zoom: f64,
    max_zoom: f64,
    fit_mode: FitMode,
}

impl MapViewport {
    /// Creates a viewport covering `device_rect`.
    ///
    /// - Initial zoom is `1.0`.
    /// - The view origin maps to the bottom-left of the device rect.
    /// - Zoom is clamped to `[2^-4, 2^4]` by default.
    #[must_use]
    pub fn new(device_rect: Rect) -> Self {
        let device_rect = device_rect.abs();
        Self {
            device_rect,
            fit: ViewFit::new(Vec2::new(device_rect.x0, device_rect.y1), 1.0),
            min_zoom: 1.0 / 16.0,
            max_zoom: 16.0,
            fit_mode: FitMode::default(),
        }
    }

    /// Returns the device rectangle.
    #[must_use]
    pub fn device_rect(&self) -> Rect {
        self.device_rect
    }

    /// Sets the device rectangle, keeping the current view center in place.
    pub fn set_device_rect(&mut self, rect: Rect) {
        let rect = rect.abs();
        if self.device_rect == rect {
            return;
        }
        let center = self.view_center();
        self.device_rect = rect;
        self.fit = ViewFit::centered(center, rect.center(), self.fit.zoom);
    }

    /// Returns the current pan/zoom.
    #[must_use]
    pub fn current(&self) -> ViewFit {
        self.fit
    }

    /// Returns the current zoom.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.fit.zoom
    }

    /// Returns the zoom limits as `(min, max)`.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The range is normalized so that `min_zoom <= max_zoom`; the current
    /// zoom is clamped into it around the view center. Limits that are not
    /// finite and positive are ignored and the previous range is kept.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let usable = |z: f64| z.is_finite() && z > 0.0;
        if !(usable(min_zoom) && usable(max_zoom)) {
            return;
        }
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.set_zoom(self.fit.zoom);
    }

    /// Sets how fitted content is positioned.
    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.fit_mode = mode;
    }

    /// Sets the zoom, clamped to the limits, keeping the view center fixed.
    pub fn set_zoom(&mut self, zoom: f64) {
        let clamped = zoom.clamp(self.min_zoom, self.max_zoom);
        if (self.fit.zoom - clamped).abs() < f64::EPSILON {
            return;
        }
        let center = self.view_center();
        self.fit = ViewFit::centered(center, self.device_rect.center(), clamped);
    }

    /// Zooms by `factor` around a device-space anchor.
    ///
    /// The view point under the anchor stays under the anchor.
    pub fn zoom_about_device_point(&mut self, anchor: Point, factor: f64) {
        if factor <= 0.0 {
            return;
        }
        let new_zoom = (self.fit.zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - self.fit.zoom).abs() < f64::EPSILON {
            return;
        }
        let anchored = self.device_to_view_point(anchor);
        self.fit = ViewFit::centered(anchored, anchor, new_zoom);
    }

    /// Pans by a delta in device space.
    pub fn pan_by_device(&mut self, delta: Vec2) {
        self.fit.pan += delta;
    }

    /// Fits a view-space rectangle into the device rect.
    ///
    /// The zoom is clamped to the viewport limits. Returns the applied fit,
    /// or `None` (state unchanged) if nothing could be fitted.
    pub fn fit_rect(&mut self, view_rect: Rect, padding: Padding) -> Option<ViewFit> {
        let options = FitOptions {
            padding,
            max_zoom: Some(self.max_zoom),
            mode: self.fit_mode,
        };
        let mut fit = fit_transform(view_rect, self.device_rect, options)?;
        if fit.zoom < self.min_zoom {
            let center = padding.apply(view_rect).center();
            fit = ViewFit::centered(center, self.device_rect.center(), self.min_zoom);
        }
        self.fit = fit;
        Some(fit)
    }

    /// Applies an externally computed fit.
    pub fn apply(&mut self, fit: ViewFit) {
        self.fit = fit;
    }

    /// Returns the view-space point at the center of the device rect.
    #[must_use]
    pub fn view_center(&self) -> Point {
        self.device_to_view_point(self.device_rect.center())
    }

    /// Returns the visible view-space rectangle.
    #[must_use]
    pub fn visible_view_rect(&self) -> Rect {
        self.fit.visible_view_rect(self.device_rect)
    }

    /// Converts a device-space point into view coordinates.
    #[must_use]
    pub fn device_to_view_point(&self, pt: Point) -> Point {
        self.fit.device_to_view_point(pt)
    }

    /// Converts a view-space point into device coordinates.
    #[must_use]
    pub fn view_to_device_point(&self, pt: Point) -> Point {
        self.fit.view_to_device_point(pt)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> MapViewportDebugInfo {
        MapViewportDebugInfo {
            device_rect: self.device_rect,
            visible_view_rect: self.visible_view_rect(),
            zoom: self.fit.zoom,
            pan: self.fit.pan,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            fit_mode: self.fit_mode,
        }
    }
}

/// Debug snapshot of a [`MapViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct MapViewportDebugInfo {
    /// Device rectangle.
    pub device_rect: Rect,
    /// View-space rectangle currently visible.
    pub visible_view_rect: Rect,
    /// Current zoom.
    pub zoom: f64,
    /// Current pan in device coordinates.
    pub pan: Vec2,
    /// Minimum zoom.
    pub min_zoom: f64,
    /// Maximum zoom.
    pub max_zoom: f64,
    /// Fit mode used by [`MapViewport::fit_rect`].
    pub fit_mode: FitMode,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect};

    use super::MapViewport;
    use crate::fit::Padding;

    #[test]
    fn fit_rect_centers_and_respects_max_zoom() {
        let mut vp = MapViewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        let fit = vp
            .fit_rect(Rect::new(10.0, 10.0, 11.0, 11.0), Padding::default())
            .unwrap();
        assert_eq!(fit.zoom, 16.0);
        let center = vp.view_center();
        assert!((center.x - 10.5).abs() < 1e-9);
        assert!((center.y - 10.5).abs() < 1e-9);
    }

    #[test]
    fn fit_rect_respects_min_zoom() {
        let mut vp = MapViewport::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        vp.set_zoom_limits(0.5, 2.0);
        let fit = vp
            .fit_rect(Rect::new(0.0, 0.0, 10_000.0, 10_000.0), Padding::default())
            .unwrap();
        assert_eq!(fit.zoom, 0.5);
        let center = vp.view_center();
        assert!((center.x - 5_000.0).abs() < 1e-6);
        assert!((center.y - 5_000.0).abs() < 1e-6);
    }

    #[test]
    fn zoom_about_anchor_keeps_anchor_fixed() {
        let mut vp = MapViewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        let anchor = Point::new(200.0, 150.0);
        let before = vp.device_to_view_point(anchor);
        vp.zoom_about_device_point(anchor, 2.0);
        let after = vp.device_to_view_point(anchor);
        assert!((before - after).hypot() < 1e-9);
        assert_eq!(vp.zoom(), 2.0);
    }

    #[test]
    fn resizing_keeps_view_center() {
        let mut vp = MapViewport::new(Rect::new(0.0, 0.0, 800.0, 600.0));
        vp.fit_rect(Rect::new(0.0, 0.0, 2000.0, 1200.0), Padding::default());
        let before = vp.view_center();
        vp.set_device_rect(Rect::new(0.0, 0.0, 400.0, 900.0));
        let after = vp.view_center();
        assert!((before - after).hypot() < 1e-9);
    }

    #[test]
    fn unusable_zoom_limits_are_ignored() {
        let mut vp = MapViewport::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        vp.set_zoom_limits(0.5, 8.0);
        vp.set_zoom_limits(f64::NAN, 4.0);
        vp.set_zoom_limits(1.0, f64::INFINITY);
        vp.set_zoom_limits(0.0, 2.0);
        vp.set_zoom_limits(-1.0, 2.0);
        assert_eq!(vp.zoom_limits(), (0.5, 8.0));
        vp.set_zoom(100.0);
        assert_eq!(vp.zoom(), 8.0);
    }

    #[test]
    fn set_zoom_limits_normalizes_and_clamps() {
        let mut vp = MapViewport::new(Rect::new(0.0, 0.0, 100.0, 100.0));
        vp.set_zoom_limits(4.0, 2.0);
        assert_eq!(vp.zoom_limits(), (2.0, 4.0));
        assert_eq!(vp.zoom(), 2.0);
        let info = vp.debug_info();
        assert!(info.min_zoom <= info.max_zoom);
    }
}
