// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration, loadable from TOML.
//!
//! Every section and key is optional; missing values take the defaults below.
//! Unknown keys are rejected so that typos do not pass silently.
//!
//! ```toml
//! [image]
//! width = 2000.0
//! height = 1200.0
//!
//! [view]
//! padding = { ratio = 0.25 }
//! max_zoom = 16.0
//!
//! [filter]
//! debounce_ms = 200
//!
//! [capture]
//! source = "view_center"
//!
//! [style]
//! precedence = "favorite_over_selected"
//! scheme = "category_hue"
//! favorite_color = "#43f58a"
//! ```

use core::time::Duration;

use floorplan_style::{
    ColorScheme, Hex, Palette, ParseColorError, Rgba8, StylePrecedence, StyleResolver,
};
use floorplan_view::{FitMode, ImageSpace, Padding};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Where a captured corner comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureSource {
    /// Arming waits for the next map click.
    #[default]
    MapClick,
    /// Arming stamps the current view center immediately.
    ViewCenter,
}

/// A CSS color in configuration files, written back as `#rrggbb[aa]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorValue(pub Rgba8);

impl TryFrom<String> for ColorValue {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse::<Hex>().map(|hex| Self(hex.0))
    }
}

impl From<ColorValue> for String {
    fn from(value: ColorValue) -> Self {
        Hex(value.0).to_string()
    }
}

/// Image space used until a record set supplies its own `image` block.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImageConfig {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            width: 2000.0,
            height: 1200.0,
        }
    }
}

impl ImageConfig {
    /// Returns the configured image space.
    #[must_use]
    pub fn image_space(&self) -> ImageSpace {
        ImageSpace::new(self.width, self.height)
    }
}

/// Viewport and fitting behavior.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// Device size `[width, height]` assumed until the host reports one.
    pub viewport: [f64; 2],
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor; also caps zoom when fitting small stands.
    pub max_zoom: f64,
    /// Placement of fitted content.
    pub fit_mode: FitMode,
    /// Padding applied when fitting a focused stand.
    pub padding: Padding,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            viewport: [800.0, 600.0],
            min_zoom: 1.0 / 16.0,
            max_zoom: 16.0,
            fit_mode: FitMode::Center,
            padding: Padding::Units(40.0),
        }
    }
}

/// Filtering behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Quiet period, in milliseconds, before a typed query is applied.
    pub debounce_ms: u64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self { debounce_ms: 200 }
    }
}

impl FilterConfig {
    /// The debounce window.
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Admin capture behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CaptureConfig {
    /// Corner source.
    pub source: CaptureSource,
}

/// Style policies and palette overrides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StyleConfig {
    /// Selected/favorite precedence.
    pub precedence: StylePrecedence,
    /// Base color source.
    pub scheme: ColorScheme,
    /// Overrides the base color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_color: Option<ColorValue>,
    /// Overrides the favorite color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_color: Option<ColorValue>,
    /// Overrides the selection color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_color: Option<ColorValue>,
}

impl StyleConfig {
    /// Builds the resolver described by this section.
    #[must_use]
    pub fn resolver(&self) -> StyleResolver {
        let mut palette = Palette::DEFAULT;
        if let Some(ColorValue(c)) = self.default_color {
            palette.default = c;
        }
        if let Some(ColorValue(c)) = self.favorite_color {
            palette.favorite = c;
        }
        if let Some(ColorValue(c)) = self.active_color {
            palette.active = c;
        }
        StyleResolver::new(palette)
            .with_precedence(self.precedence)
            .with_scheme(self.scheme)
    }
}

/// Targets of the per-stand deep links.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinkConfig {
    /// Page opened by the QR code.
    pub share_page: String,
    /// Page opened by the AR link.
    pub ar_page: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            share_page: "./s.html".to_owned(),
            ar_page: "./ar.html".to_owned(),
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Fallback image space.
    pub image: ImageConfig,
    /// Viewport and fitting.
    pub view: ViewConfig,
    /// Filtering.
    pub filter: FilterConfig,
    /// Admin capture.
    pub capture: CaptureConfig,
    /// Styling.
    pub style: StyleConfig,
    /// Deep links.
    pub links: LinkConfig,
}

impl EngineConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes this configuration as TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks values that the type system cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ImageConfig { width, height } = self.image;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::ImageSize { width, height });
        }
        let ViewConfig {
            min_zoom,
            max_zoom,
            ..
        } = self.view;
        if !(min_zoom.is_finite() && max_zoom.is_finite() && min_zoom > 0.0 && min_zoom <= max_zoom)
        {
            return Err(ConfigError::ZoomLimits { min_zoom, max_zoom });
        }
        let [vw, vh] = self.view.viewport;
        if !(vw.is_finite() && vh.is_finite() && vw > 0.0 && vh > 0.0) {
            return Err(ConfigError::Viewport {
                width: vw,
                height: vh,
            });
        }
        Ok(())
    }
}
