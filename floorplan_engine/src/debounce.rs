// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::{Duration, Instant};

/// Coalesces rapid query edits into one filter pass.
///
/// The caller supplies timestamps, so the debouncer never reads a clock.
/// Each [`push`](Self::push) restarts the quiet period; [`poll`](Self::poll)
/// releases the latest text once the period has elapsed.
#[derive(Clone, Debug)]
pub struct QueryDebouncer {
    window: Duration,
    pending: Option<(String, Instant)>,
}

impl QueryDebouncer {
    /// Creates a debouncer with the given quiet period.
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// The quiet period.
    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }

    /// Records an edit made at `now`, replacing any pending text.
    pub fn push(&mut self, text: impl Into<String>, now: Instant) {
        self.pending = Some((text.into(), now));
    }

    /// Returns `true` while an edit is waiting.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Instant at which the pending edit becomes due.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, at)| *at + self.window)
    }

    /// Takes the pending text if the quiet period has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = self.deadline().is_some_and(|deadline| now >= deadline);
        if due { self.flush() } else { None }
    }

    /// Takes the pending text regardless of timing.
    pub fn flush(&mut self) -> Option<String> {
        self.pending.take().map(|(text, _)| text)
    }

    /// Drops the pending text.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
