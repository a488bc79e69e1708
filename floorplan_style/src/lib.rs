// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floorplan Style: map region state to a render style.
//!
//! [`StyleResolver::resolve`] is a pure function of [`StyleFlags`]: the same
//! flags always produce the same [`StyleDescriptor`], so re-rendering after an
//! unrelated change never flickers. The policy, by precedence:
//!
//! - `SELECTED` switches color and weight to the active palette.
//! - `FAVORITE` (when not selected) uses the favorite color.
//! - Without `VISIBLE`, opacity and fill opacity drop to near zero while the
//!   color is computed exactly as for a visible region.
//!
//! The selected/favorite precedence is a [`StylePrecedence`] policy, and the
//! base color can either be fixed or derived from a stable hash of the
//! category ([`ColorScheme`]).
//!
//! ## Minimal example
//!
//! ```rust
//! use floorplan_style::{Palette, StyleFlags, StyleResolver};
//!
//! let resolver = StyleResolver::default();
//! let favorite = resolver.resolve(StyleFlags::VISIBLE | StyleFlags::FAVORITE);
//! let selected = resolver.resolve(StyleFlags::all());
//! assert_eq!(favorite.color, Palette::DEFAULT.favorite);
//! assert_eq!(selected.color, Palette::DEFAULT.active);
//!
//! let hidden = resolver.resolve(StyleFlags::FAVORITE);
//! assert_eq!(hidden.color, favorite.color);
//! assert!(hidden.opacity < favorite.opacity);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod flags;
mod hue;
mod resolver;

pub use flags::StyleFlags;
pub use hue::{Hex, ParseColorError, category_color, category_hash};
pub use peniko::color::Rgba8;
pub use resolver::{ColorScheme, Palette, StyleDescriptor, StylePrecedence, StyleResolver};
