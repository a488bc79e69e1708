// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use floorplan_regions::Stand;
use kurbo::Rect;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::config::LinkConfig;

/// Characters escaped in a query-string value.
///
/// Everything but ASCII alphanumerics and `-_.!~*'()` is escaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Display card for a focused stand.
#[derive(Clone, Debug, PartialEq)]
pub struct StandSummary {
    /// Stand id.
    pub id: String,
    /// `"{id} — {name}"`.
    pub title: String,
    /// `"{category} • token={token}"`.
    pub meta: String,
    /// Description, or `"—"` when empty.
    pub description: String,
    /// Free-form note; may be empty.
    pub note: String,
    /// Whether the stand is a favorite.
    pub favorite: bool,
    /// Share page link carrying the stand token.
    pub qr_link: String,
    /// AR page link carrying the stand token.
    pub ar_link: String,
    /// Pixel-space bounds.
    pub bounds: Rect,
}

impl StandSummary {
    pub(crate) fn new(stand: &Stand, favorite: bool, links: &LinkConfig) -> Self {
        let token = utf8_percent_encode(&stand.token, QUERY_VALUE).to_string();
        let description = if stand.description.is_empty() {
            "—".to_owned()
        } else {
            stand.description.clone()
        };
        Self {
            id: stand.id.clone(),
            title: format!("{} — {}", stand.id, stand.name),
            meta: format!("{} • token={}", stand.category, stand.token),
            description,
            note: stand.note.clone(),
            favorite,
            qr_link: format!("{}?token={token}", links.share_page),
            ar_link: format!("{}?token={token}", links.ar_page),
            bounds: stand.bounds,
        }
    }
}
