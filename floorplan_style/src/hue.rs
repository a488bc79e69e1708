// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::str::FromStr;

use peniko::color::{AlphaColor, Hsl, ParseError, Rgba8, Srgb, parse_color};
use thiserror::Error;

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// 32-bit FNV-1a hash of the category's UTF-8 bytes.
///
/// The value is fixed by the algorithm, so it is identical across runs,
/// platforms, and builds.
#[must_use]
pub fn category_hash(category: &str) -> u32 {
    category.bytes().fold(FNV_OFFSET, |hash, byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Stable color for a category: its hash picks the hue.
#[must_use]
pub fn category_color(category: &str) -> Rgba8 {
    let hue = (category_hash(category) % 360) as f32;
    AlphaColor::<Hsl>::new([hue, 75.0, 62.0, 1.0])
        .convert::<Srgb>()
        .to_rgba8()
}

/// Displays a color as `#rrggbb`, or `#rrggbbaa` when not opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hex(pub Rgba8);

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgba8 { r, g, b, a } = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")?;
        if a != u8::MAX {
            write!(f, "{a:02x}")?;
        }
        Ok(())
    }
}

/// A string that is not a CSS color.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error(transparent)]
pub struct ParseColorError(#[from] ParseError);

/// Parses any CSS color (`#rgb`, `#rrggbbaa`, named colors, `rgb(...)`, ...).
///
/// Colors outside sRGB are clamped when converted to 8-bit channels.
impl FromStr for Hex {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let color = parse_color(s)?;
        Ok(Self(color.to_alpha_color::<Srgb>().to_rgba8()))
    }
}
