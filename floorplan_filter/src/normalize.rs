// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Folds text for matching: lower-case, canonical decomposition, and no combining marks.
///
/// `"Café"` and `"CAFE"` both fold to `"cafe"`. Whitespace is kept as is.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::normalize_text;

    #[test]
    fn strips_case_and_diacritics() {
        assert_eq!(normalize_text("Café"), "cafe");
        assert_eq!(normalize_text("ROBÓTICA Ñandú"), "robotica nandu");
        assert_eq!(normalize_text("  spaced  "), "  spaced  ");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn precomposed_and_decomposed_forms_agree() {
        let precomposed = "\u{e9}";
        let decomposed = "e\u{301}";
        assert_eq!(normalize_text(precomposed), normalize_text(decomposed));
    }
}
