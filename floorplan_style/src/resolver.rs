// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::color::Rgba8;

use crate::flags::StyleFlags;
use crate::hue::category_color;

/// Visual properties handed to the renderer for one region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleDescriptor {
    /// Stroke color.
    pub color: Rgba8,
    /// Fill color.
    pub fill_color: Rgba8,
    /// Stroke width in device pixels.
    pub weight: f64,
    /// Stroke opacity in `[0, 1]`.
    pub opacity: f32,
    /// Fill opacity in `[0, 1]`.
    pub fill_opacity: f32,
}

/// Which flag wins the color when a region is both selected and a favorite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StylePrecedence {
    /// Selection takes the active color regardless of favorite status.
    #[default]
    SelectedOverFavorite,
    /// Favorites keep their color while selected; only the weight changes.
    FavoriteOverSelected,
}

/// Where the non-favorite, non-selected color comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColorScheme {
    /// Every region uses [`Palette::default`].
    #[default]
    Fixed,
    /// Each category gets a stable hue from [`category_color`].
    CategoryHue,
}

/// Colors, weights, and opacities used by the resolver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Base color.
    pub default: Rgba8,
    /// Favorite color.
    pub favorite: Rgba8,
    /// Selection color.
    pub active: Rgba8,
    /// Base stroke width.
    pub weight: f64,
    /// Stroke width while selected.
    pub active_weight: f64,
    /// Stroke opacity while visible.
    pub opacity: f32,
    /// Fill opacity while visible.
    pub fill_opacity: f32,
    /// Stroke opacity while filtered out.
    pub hidden_opacity: f32,
    /// Fill opacity while filtered out.
    pub hidden_fill_opacity: f32,
}

const fn rgb(r: u8, g: u8, b: u8) -> Rgba8 {
    Rgba8 { r, g, b, a: 255 }
}

impl Palette {
    /// Cyan regions, green favorites, amber selection.
    pub const DEFAULT: Self = Self {
        default: rgb(0x5e, 0xe7, 0xff),
        favorite: rgb(0x43, 0xf5, 0x8a),
        active: rgb(0xff, 0xb0, 0x20),
        weight: 2.0,
        active_weight: 3.0,
        opacity: 1.0,
        fill_opacity: 0.12,
        hidden_opacity: 0.15,
        hidden_fill_opacity: 0.02,
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Pure mapping from [`StyleFlags`] to [`StyleDescriptor`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StyleResolver {
    /// Colors and opacities.
    pub palette: Palette,
    /// Selected/favorite precedence.
    pub precedence: StylePrecedence,
    /// Base color source.
    pub scheme: ColorScheme,
}

impl StyleResolver {
    /// Creates a resolver with the given palette and the canonical policies.
    #[must_use]
    pub const fn new(palette: Palette) -> Self {
        Self {
            palette,
            precedence: StylePrecedence::SelectedOverFavorite,
            scheme: ColorScheme::Fixed,
        }
    }

    /// Returns this resolver with a different precedence policy.
    #[must_use]
    pub const fn with_precedence(mut self, precedence: StylePrecedence) -> Self {
        self.precedence = precedence;
        self
    }

    /// Returns this resolver with a different color scheme.
    #[must_use]
    pub const fn with_scheme(mut self, scheme: ColorScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Resolves a style using the palette's base color.
    #[must_use]
    pub fn resolve(&self, flags: StyleFlags) -> StyleDescriptor {
        self.resolve_with_base(flags, self.palette.default)
    }

    /// Resolves a style for a region of `category`, honoring the color scheme.
    #[must_use]
    pub fn resolve_for(&self, flags: StyleFlags, category: &str) -> StyleDescriptor {
        let base = match self.scheme {
            ColorScheme::Fixed => self.palette.default,
            ColorScheme::CategoryHue => category_color(category),
        };
        self.resolve_with_base(flags, base)
    }

    fn resolve_with_base(&self, flags: StyleFlags, base: Rgba8) -> StyleDescriptor {
        let p = &self.palette;
        let selected = flags.contains(StyleFlags::SELECTED);
        let favorite = flags.contains(StyleFlags::FAVORITE);

        let color = match (selected, favorite, self.precedence) {
            (true, true, StylePrecedence::FavoriteOverSelected) => p.favorite,
            (true, _, _) => p.active,
            (false, true, _) => p.favorite,
            (false, false, _) => base,
        };
        let weight = if selected { p.active_weight } else { p.weight };
        let (opacity, fill_opacity) = if flags.contains(StyleFlags::VISIBLE) {
            (p.opacity, p.fill_opacity)
        } else {
            (p.hidden_opacity, p.hidden_fill_opacity)
        };

        StyleDescriptor {
            color,
            fill_color: color,
            weight,
            opacity,
            fill_opacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorScheme, Palette, StylePrecedence, StyleResolver};
    use crate::flags::StyleFlags;
    use crate::hue::category_color;

    const ALL_FLAGS: [StyleFlags; 8] = [
        StyleFlags::empty(),
        StyleFlags::VISIBLE,
        StyleFlags::FAVORITE,
        StyleFlags::SELECTED,
        StyleFlags::VISIBLE.union(StyleFlags::FAVORITE),
        StyleFlags::VISIBLE.union(StyleFlags::SELECTED),
        StyleFlags::FAVORITE.union(StyleFlags::SELECTED),
        StyleFlags::all(),
    ];

    #[test]
    fn identical_flags_give_identical_descriptors() {
        let resolver = StyleResolver::default();
        for flags in ALL_FLAGS {
            let a = resolver.resolve(flags);
            let b = resolver.resolve(flags);
            assert_eq!(a, b);
            assert_eq!(a.opacity.to_bits(), b.opacity.to_bits());
            assert_eq!(a.fill_opacity.to_bits(), b.fill_opacity.to_bits());
            assert_eq!(a.weight.to_bits(), b.weight.to_bits());
        }
    }

    #[test]
    fn selection_overrides_favorite_by_default() {
        let resolver = StyleResolver::default();
        let p = Palette::DEFAULT;
        let s = resolver.resolve(StyleFlags::all());
        assert_eq!(s.color, p.active);
        assert_eq!(s.weight, p.active_weight);

        let f = resolver.resolve(StyleFlags::VISIBLE | StyleFlags::FAVORITE);
        assert_eq!(f.color, p.favorite);
        assert_eq!(f.weight, p.weight);

        let d = resolver.resolve(StyleFlags::VISIBLE);
        assert_eq!(d.color, p.default);
        assert_eq!(d.fill_color, d.color);
    }

    #[test]
    fn favorite_precedence_policy_keeps_favorite_color() {
        let resolver =
            StyleResolver::default().with_precedence(StylePrecedence::FavoriteOverSelected);
        let p = Palette::DEFAULT;
        let s = resolver.resolve(StyleFlags::all());
        assert_eq!(s.color, p.favorite);
        assert_eq!(s.weight, p.active_weight);
        assert_eq!(resolver.resolve(StyleFlags::SELECTED).color, p.active);
    }

    #[test]
    fn hiding_only_changes_opacity() {
        let resolver = StyleResolver::default();
        let p = Palette::DEFAULT;
        for flags in ALL_FLAGS {
            let shown = resolver.resolve(flags | StyleFlags::VISIBLE);
            let hidden = resolver.resolve(flags - StyleFlags::VISIBLE);
            assert_eq!(shown.color, hidden.color);
            assert_eq!(shown.weight, hidden.weight);
            assert_eq!(hidden.opacity, p.hidden_opacity);
            assert_eq!(hidden.fill_opacity, p.hidden_fill_opacity);
            assert_eq!(shown.opacity, p.opacity);
        }
    }

    #[test]
    fn category_scheme_only_affects_plain_regions() {
        let resolver = StyleResolver::new(Palette::DEFAULT).with_scheme(ColorScheme::CategoryHue);
        let plain = resolver.resolve_for(StyleFlags::VISIBLE, "Food");
        assert_eq!(plain.color, category_color("Food"));
        let fav = resolver.resolve_for(StyleFlags::VISIBLE | StyleFlags::FAVORITE, "Food");
        assert_eq!(fav.color, Palette::DEFAULT.favorite);

        let fixed = StyleResolver::default().resolve_for(StyleFlags::VISIBLE, "Food");
        assert_eq!(fixed.color, Palette::DEFAULT.default);
    }
}
