// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use floorplan_filter::FilterStats;
use floorplan_selection::{CaptureToken, Corner, PendingCapture};
use floorplan_view::ViewFit;
use kurbo::Point;

use crate::summary::StandSummary;

/// Something the presentation layer should react to.
///
/// Events accumulate inside the [`Engine`](crate::Engine) until drained.
#[derive(Clone, Debug, PartialEq)]
pub enum EngineEvent {
    /// A record set was loaded.
    Loaded {
        /// Stands accepted into the store.
        accepted: usize,
        /// Records dropped during ingestion.
        rejected: usize,
    },
    /// The record set could not be obtained; the store is now empty.
    LoadFailed {
        /// Human-readable cause.
        message: String,
    },
    /// The visible subset was recomputed.
    VisibilityChanged {
        /// Counts after the change.
        stats: FilterStats,
    },
    /// A stand gained focus.
    Focused {
        /// Display card for the stand.
        summary: StandSummary,
        /// Viewport framing the stand, if one could be computed.
        fit: Option<ViewFit>,
    },
    /// Focus was cleared.
    FocusCleared {
        /// The stand that lost focus.
        id: String,
    },
    /// A selection named a stand that does not exist.
    SelectMissed {
        /// The requested id.
        id: String,
    },
    /// A favorite was added or removed.
    FavoriteToggled {
        /// Stand id.
        id: String,
        /// Favorite status after the toggle.
        favorite: bool,
    },
    /// A corner is waiting for the next map click.
    CaptureArmed {
        /// Corner that was armed.
        corner: Corner,
        /// Token of the new arm.
        token: CaptureToken,
        /// Arm cancelled by this one.
        replaced: Option<PendingCapture>,
    },
    /// A capture corner was stamped, in pixel space.
    CornerCaptured {
        /// Corner that was stamped.
        corner: Corner,
        /// Pixel-space point.
        point: Point,
    },
    /// The viewport was fitted to the whole plan.
    ViewFitted {
        /// Applied fit.
        fit: ViewFit,
    },
}
