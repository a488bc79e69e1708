// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wire shapes of the record set and the per-record validating decode.

use floorplan_view::{ImageSpace, normalize_bounds};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{RejectReason, Rejection};
use crate::stand::Stand;

const DEFAULT_CATEGORY: &str = "General";

/// The `image` block of a record set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSpec {
    /// Location of the floor-plan image. Loading it is the caller's concern.
    #[serde(default)]
    pub url: String,
    /// Image width in pixels.
    pub width: f64,
    /// Image height in pixels.
    pub height: f64,
}

impl ImageSpec {
    /// Returns the image space described by this block.
    #[must_use]
    pub fn image_space(&self) -> ImageSpace {
        ImageSpace::new(self.width, self.height)
    }
}

/// One stand in the record shape, as exported and as authored by hand.
///
/// Loading a serialized `StandRecord` yields the same [`Stand`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandRecord {
    /// Primary key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category label, compared case-sensitively.
    pub category: String,
    /// Opaque identifier used by external QR/AR links.
    pub token: String,
    /// Normalized `[min_x, min_y, max_x, max_y]` in image pixels.
    pub bounds: [f64; 4],
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Free-form note.
    #[serde(default)]
    pub note: String,
}

impl From<&Stand> for StandRecord {
    fn from(stand: &Stand) -> Self {
        let b = stand.bounds;
        Self {
            id: stand.id.clone(),
            name: stand.name.clone(),
            category: stand.category.clone(),
            token: stand.token.clone(),
            bounds: [b.x0, b.y0, b.x1, b.y1],
            description: stand.description.clone(),
            note: stand.note.clone(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Integer(i64),
}

/// Permissive intermediate form; validation happens in [`decode_stand`].
#[derive(Deserialize)]
struct RawStand {
    id: Option<RawId>,
    name: Option<String>,
    category: Option<String>,
    description: Option<String>,
    desc: Option<String>,
    note: Option<String>,
    token: Option<String>,
    bounds: Option<Vec<Value>>,
}

/// Decodes one raw record into a [`Stand`].
///
/// Missing optional fields take the documented defaults: `name` and `token`
/// fall back to the id, `category` to `"General"`, `description` and `note`
/// to the empty string. The legacy `desc` key is read when `description` is
/// absent. Bounds are normalized so corner order is irrelevant.
pub(crate) fn decode_stand(index: usize, value: &Value) -> Result<Stand, Rejection> {
    let reject = |id: Option<String>, reason| Rejection { index, id, reason };

    if !value.is_object() {
        return Err(reject(
            None,
            RejectReason::Malformed("record is not an object".into()),
        ));
    }
    let raw = RawStand::deserialize(value)
        .map_err(|err| reject(peek_id(value), RejectReason::Malformed(err.to_string())))?;

    let id = match raw.id {
        None => return Err(reject(None, RejectReason::MissingId)),
        Some(RawId::Text(text)) => text,
        Some(RawId::Integer(n)) => n.to_string(),
    };
    if id.is_empty() {
        return Err(reject(None, RejectReason::EmptyId));
    }

    let bounds = match validate_bounds(raw.bounds.as_deref()) {
        Ok(b) => b,
        Err(reason) => return Err(reject(Some(id), reason)),
    };

    Ok(Stand {
        name: raw.name.unwrap_or_else(|| id.clone()),
        category: raw.category.unwrap_or_else(|| DEFAULT_CATEGORY.into()),
        description: raw.description.or(raw.desc).unwrap_or_default(),
        note: raw.note.unwrap_or_default(),
        token: raw.token.unwrap_or_else(|| id.clone()),
        bounds: normalize_bounds(bounds[0], bounds[1], bounds[2], bounds[3]),
        id,
    })
}

fn validate_bounds(bounds: Option<&[Value]>) -> Result<[f64; 4], RejectReason> {
    let Some(values) = bounds else {
        return Err(RejectReason::InvalidBounds("missing".into()));
    };
    if values.len() != 4 {
        return Err(RejectReason::InvalidBounds(format!(
            "found {} values",
            values.len()
        )));
    }
    let mut out = [0.0; 4];
    for (slot, value) in out.iter_mut().zip(values) {
        match value.as_f64() {
            Some(v) if v.is_finite() => *slot = v,
            _ => {
                return Err(RejectReason::InvalidBounds(format!(
                    "non-numeric value {value}"
                )));
            }
        }
    }
    Ok(out)
}

fn peek_id(value: &Value) -> Option<String> {
    match value.get("id")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
