// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use floorplan_view::normalize_bounds;
use hashbrown::{HashMap, HashSet};
use kurbo::Point;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{LoadError, LoadReport, RejectReason, Rejection};
use crate::record::{ImageSpec, StandRecord, decode_stand};
use crate::stand::Stand;

/// Result of parsing a whole record set document.
#[derive(Debug)]
pub struct LoadedRecords {
    /// The stands that passed validation.
    pub store: RegionStore,
    /// Records that were dropped.
    pub report: LoadReport,
    /// The `image` block, if the document had one.
    pub image: Option<ImageSpec>,
}

/// Load-once collection of stands, kept in ingestion order.
#[derive(Clone, Debug, Default)]
pub struct RegionStore {
    stands: Vec<Stand>,
    by_id: HashMap<String, usize>,
}

impl RegionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingests raw records.
    ///
    /// Each record is decoded independently. Malformed records and records
    /// whose id was already taken are dropped and listed in the report; the
    /// load itself never fails.
    pub fn load<'a, I>(records: I) -> (Self, LoadReport)
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut store = Self::new();
        let mut report = LoadReport::default();
        for (index, value) in records.into_iter().enumerate() {
            let outcome = decode_stand(index, value).and_then(|stand| store.push(index, stand));
            note_rejection(outcome, &mut report);
        }
        debug!(
            accepted = store.len(),
            rejected = report.rejected_count(),
            "ingested stand records"
        );
        (store, report)
    }

    /// Builds a store from already typed stands.
    ///
    /// The same rules as [`RegionStore::load`] apply: empty ids, non-finite
    /// bounds, and repeated ids are dropped, and bounds are normalized.
    pub fn from_stands<I>(stands: I) -> (Self, LoadReport)
    where
        I: IntoIterator<Item = Stand>,
    {
        let mut store = Self::new();
        let mut report = LoadReport::default();
        for (index, stand) in stands.into_iter().enumerate() {
            let outcome = store.push(index, stand);
            note_rejection(outcome, &mut report);
        }
        (store, report)
    }

    /// Parses a record set document.
    ///
    /// Accepts either `{ "image": {...}, "stands": [...] }` or a bare array of
    /// stand records. Only document-level problems are errors.
    pub fn from_json_str(text: &str) -> Result<LoadedRecords, LoadError> {
        let document: Value = serde_json::from_str(text)?;
        let (image, records) = match document {
            Value::Array(records) => (None, records),
            Value::Object(mut map) => {
                let image = match map.remove("image") {
                    None | Some(Value::Null) => None,
                    Some(block) => {
                        Some(serde_json::from_value::<ImageSpec>(block).map_err(LoadError::Image)?)
                    }
                };
                match map.remove("stands") {
                    Some(Value::Array(records)) => (image, records),
                    _ => return Err(LoadError::MissingStands),
                }
            }
            _ => return Err(LoadError::NotARecordSet),
        };
        let (store, report) = Self::load(&records);
        Ok(LoadedRecords {
            store,
            report,
            image,
        })
    }

    fn push(&mut self, index: usize, mut stand: Stand) -> Result<(), Rejection> {
        if stand.id.is_empty() {
            return Err(Rejection {
                index,
                id: None,
                reason: RejectReason::EmptyId,
            });
        }
        let b = stand.bounds;
        if ![b.x0, b.y0, b.x1, b.y1].iter().all(|v| v.is_finite()) {
            return Err(Rejection {
                index,
                id: Some(stand.id),
                reason: RejectReason::InvalidBounds("non-finite value".into()),
            });
        }
        stand.bounds = normalize_bounds(b.x0, b.y0, b.x1, b.y1);
        if self.by_id.contains_key(&stand.id) {
            return Err(Rejection {
                index,
                id: Some(stand.id),
                reason: RejectReason::DuplicateId,
            });
        }
        self.by_id.insert(stand.id.clone(), self.stands.len());
        self.stands.push(stand);
        Ok(())
    }

    /// Number of stands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stands.len()
    }

    /// Returns `true` if the store holds no stands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stands.is_empty()
    }

    /// Looks up a stand by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Stand> {
        self.by_id.get(id).map(|&idx| &self.stands[idx])
    }

    /// Returns `true` if a stand with `id` exists.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Position of the stand with `id` in ingestion order.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// All stands in ingestion order.
    #[must_use]
    pub fn all(&self) -> &[Stand] {
        &self.stands
    }

    /// Iterates over stands in ingestion order.
    pub fn iter(&self) -> core::slice::Iter<'_, Stand> {
        self.stands.iter()
    }

    /// Distinct category values, case-sensitive.
    ///
    /// The values are listed in order of first appearance; sorting for
    /// display is up to the caller.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.stands
            .iter()
            .map(|s| s.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Visits every stand whose bound contains the pixel-space point, in store order.
    pub fn hits(&self, pt: Point) -> impl Iterator<Item = &Stand> + '_ {
        self.stands.iter().filter(move |s| s.contains(pt))
    }

    /// Returns the topmost stand under the pixel-space point.
    ///
    /// Later stands draw over earlier ones, so the last hit wins.
    #[must_use]
    pub fn hit_test(&self, pt: Point) -> Option<&Stand> {
        self.stands.iter().rev().find(|s| s.contains(pt))
    }

    /// Exports every stand in the record shape, in store order.
    #[must_use]
    pub fn to_records(&self) -> Vec<StandRecord> {
        self.stands.iter().map(StandRecord::from).collect()
    }

    /// Exports the store as a pretty-printed JSON array of records.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.to_records())
    }
}

fn note_rejection(outcome: Result<(), Rejection>, report: &mut LoadReport) {
    if let Err(rejection) = outcome {
        warn!(
            index = rejection.index,
            id = rejection.id.as_deref().unwrap_or(""),
            reason = %rejection.reason,
            "dropping stand record"
        );
        report.rejected.push(rejection);
    }
}

impl<'a> IntoIterator for &'a RegionStore {
    type Item = &'a Stand;
    type IntoIter = core::slice::Iter<'a, Stand>;

    fn into_iter(self) -> Self::IntoIter {
        self.stands.iter()
    }
}
