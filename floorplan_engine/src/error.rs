// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use floorplan_selection::IncompleteCapture;
use thiserror::Error;

/// A configuration document that could not be used.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid TOML or does not match the schema.
    #[error("invalid engine configuration")]
    Toml(#[from] toml::de::Error),
    /// The configuration could not be written as TOML.
    #[error("failed to serialize engine configuration")]
    Serialize(#[from] toml::ser::Error),
    /// The fallback image has no area.
    #[error("image size must be positive and finite, got {width}x{height}")]
    ImageSize {
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },
    /// The zoom range is empty or not positive.
    #[error("zoom limits must satisfy 0 < min_zoom <= max_zoom, got {min_zoom}..{max_zoom}")]
    ZoomLimits {
        /// Configured minimum.
        min_zoom: f64,
        /// Configured maximum.
        max_zoom: f64,
    },
    /// The initial viewport has no area.
    #[error("viewport must be positive and finite, got {width}x{height}")]
    Viewport {
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },
}

/// An engine operation that was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The operation requires admin mode.
    #[error("admin mode is disabled")]
    AdminDisabled,
    /// The capture does not have both corners yet.
    #[error(transparent)]
    Incomplete(#[from] IncompleteCapture),
}
