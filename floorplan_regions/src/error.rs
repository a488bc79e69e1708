// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// Failure to obtain or parse a whole record set.
///
/// Individual bad records are never a `LoadError`; they become [`Rejection`]s.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The document is not valid JSON.
    #[error("record set is not valid JSON")]
    Json(#[from] serde_json::Error),
    /// The document is neither an object nor a bare array of stands.
    #[error("record set must be an object with a `stands` array or an array of stands")]
    NotARecordSet,
    /// The object form has no `stands` array.
    #[error("record set has no `stands` array")]
    MissingStands,
    /// The `image` block is present but does not describe an image.
    #[error("invalid `image` block")]
    Image(#[source] serde_json::Error),
    /// The record set could not be fetched.
    ///
    /// Produced by the caller's I/O layer and handed to the engine as is.
    #[error("failed to fetch record set: {0}")]
    Fetch(String),
}

/// Why a single record was dropped during ingestion.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RejectReason {
    /// The record has no `id` (or it is `null`).
    #[error("record has no `id`")]
    MissingId,
    /// The `id` is an empty string.
    #[error("`id` is empty")]
    EmptyId,
    /// An earlier record already used this `id`.
    #[error("`id` is already used by an earlier record")]
    DuplicateId,
    /// `bounds` is missing or is not exactly four finite numbers.
    #[error("`bounds` must be exactly 4 finite numbers ({0})")]
    InvalidBounds(String),
    /// The record is not an object or has a field of the wrong type.
    #[error("malformed record: {0}")]
    Malformed(String),
}

/// A dropped record and the reason it was dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    /// Position of the record in the input sequence.
    pub index: usize,
    /// The record's id, when one could be read.
    pub id: Option<String>,
    /// Why the record was dropped.
    pub reason: RejectReason,
}

/// Diagnostics accumulated while loading a store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Every dropped record, in input order.
    pub rejected: Vec<Rejection>,
}

impl LoadReport {
    /// Number of dropped records.
    #[must_use]
    pub fn rejected_count(&self) -> usize {
        self.rejected.len()
    }

    /// Returns `true` if every record was accepted.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}
