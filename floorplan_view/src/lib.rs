// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floorplan View: coordinate primitives for an image-backed floor-plan map.
//!
//! A floor plan is a raster image. Regions on it are authored in **image-pixel
//! space**, where the origin is the top-left corner and rows grow downward.
//! The map renders in **view space**, which shares the X axis but points the
//! vertical axis up, so the plan covers `(0, -height)-(width, 0)`. This crate
//! provides:
//! - [`CoordinateSystem`]: the Y-negating bijection between the two spaces.
//! - [`fit_transform`]: the pan/zoom pair that frames a view-space rectangle
//!   inside a device viewport.
//! - [`MapViewport`]: a small camera holding the current pan/zoom with zoom
//!   limits, used to turn raw pointer positions into view space.
//!
//! It does **not** own any rendering backend or event loop. Callers draw the
//! plan and its regions themselves using the returned transforms.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use floorplan_view::{CoordinateSystem, FitOptions, ImageSpace, Padding, fit_transform};
//!
//! let coords = CoordinateSystem::new(ImageSpace::new(2000.0, 1200.0));
//!
//! // A stand authored in pixel space, top-left origin.
//! let bounds = Rect::new(100.0, 200.0, 300.0, 260.0);
//! let view = coords.to_view_rect(bounds);
//! assert_eq!(view, Rect::new(100.0, -260.0, 300.0, -200.0));
//! assert_eq!(coords.to_pixel_bounds(view), bounds);
//!
//! // Frame it in an 800x600 window with a 10 pixel margin.
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! let options = FitOptions {
//!     padding: Padding::Units(10.0),
//!     ..FitOptions::default()
//! };
//! let fit = fit_transform(view, viewport, options).unwrap();
//! let center = fit.view_to_device_point(view.center());
//! assert!((center - viewport.center()).hypot() < 1e-9);
//! ```
//!
//! ## Device convention
//!
//! Device space (window pixels) grows downward like image-pixel space, so the
//! mapping from view space to device space flips Y once more:
//! `device = pan + zoom * (x, -y)`. Zoom is uniform on both axes.
//!
//! This crate is `no_std`.

#![no_std]

mod coords;
mod fit;
mod modes;
mod viewport;

pub use coords::{CoordinateSystem, ImageSpace, normalize_bounds};
pub use fit::{FitOptions, Padding, ViewFit, fit_transform};
pub use modes::FitMode;
pub use viewport::{MapViewport, MapViewportDebugInfo};
