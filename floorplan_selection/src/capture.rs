// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-corner capture: arm a corner, let the next map click stamp it.
//!
//! ## Usage
//!
//! 1) Call [`Capture::arm`] with the corner to capture. This cancels an arm
//!    of the same corner that has not fired yet; the other corner's arm is
//!    left alone.
//! 2) Feed every map click to [`Capture::on_map_click`]. The first click after
//!    arming stamps every armed corner and disarms them; later clicks are
//!    ignored.
//! 3) Once both corners exist, [`Capture::bounds`] yields the normalized rect.
//! 4) [`Capture::clear`] forgets both corners at once.

use kurbo::{Point, Rect};
use thiserror::Error;

/// Which corner of the capture rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// Corner 1.
    First,
    /// Corner 2.
    Second,
}

impl Corner {
    /// Both corners, in order.
    pub const ALL: [Self; 2] = [Self::First, Self::Second];

    const fn slot(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// Identifies one arm of a corner listener.
///
/// Tokens are unique within a [`Capture`]; a replaced arm's token never fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CaptureToken(u64);

impl CaptureToken {
    /// Raw token value.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// An arm waiting for a map click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingCapture {
    /// Corner the next click will stamp.
    pub corner: Corner,
    /// Token of this arm.
    pub token: CaptureToken,
}

/// Result of [`Capture::arm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Armed {
    /// Token of the new arm.
    pub token: CaptureToken,
    /// Arm of the same corner that was cancelled by this one, if any.
    pub replaced: Option<PendingCapture>,
}

/// Corners stamped by one map click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CaptureEvent {
    /// Point supplied by the click.
    pub point: Point,
    fired: [Option<CaptureToken>; 2],
}

impl CaptureEvent {
    /// Token of the arm that stamped `corner`, if that corner was armed.
    #[must_use]
    pub fn token(&self, corner: Corner) -> Option<CaptureToken> {
        self.fired[corner.slot()]
    }

    /// Returns `true` if this click stamped `corner`.
    #[must_use]
    pub fn stamped(&self, corner: Corner) -> bool {
        self.token(corner).is_some()
    }

    /// Stamped corners, in order.
    pub fn corners(&self) -> impl Iterator<Item = Corner> {
        let fired = self.fired;
        Corner::ALL
            .into_iter()
            .filter(move |c| fired[c.slot()].is_some())
    }
}

/// [`Capture::bounds`] was asked for before both corners existed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum IncompleteCapture {
    /// Corner 1 is missing.
    #[error("capture is incomplete: corner 1 is missing")]
    MissingFirst,
    /// Corner 2 is missing.
    #[error("capture is incomplete: corner 2 is missing")]
    MissingSecond,
    /// Neither corner has been captured.
    #[error("capture is incomplete: both corners are missing")]
    MissingBoth,
}

/// Capture state: two independent corners, each with at most one pending arm.
#[derive(Clone, Debug, Default)]
pub struct Capture {
    corners: [Option<Point>; 2],
    pending: [Option<CaptureToken>; 2],
    next_token: u64,
}

impl Capture {
    /// Creates a capture with no corners and nothing armed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            corners: [None; 2],
            pending: [None; 2],
            next_token: 0,
        }
    }

    /// Arms `corner` for the next map click, replacing that corner's pending arm.
    pub fn arm(&mut self, corner: Corner) -> Armed {
        let token = CaptureToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        let replaced = self.pending[corner.slot()]
            .replace(token)
            .map(|token| PendingCapture { corner, token });
        Armed { token, replaced }
    }

    /// Returns the pending arm of `corner`, if any.
    #[must_use]
    pub fn pending(&self, corner: Corner) -> Option<PendingCapture> {
        self.pending[corner.slot()].map(|token| PendingCapture { corner, token })
    }

    /// Returns `true` while any arm is waiting for a click.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.iter().any(Option::is_some)
    }

    /// Disarms `corner` without stamping anything.
    pub fn cancel(&mut self, corner: Corner) -> Option<PendingCapture> {
        self.pending[corner.slot()]
            .take()
            .map(|token| PendingCapture { corner, token })
    }

    /// Disarms both corners. Returns how many arms were pending.
    pub fn cancel_all(&mut self) -> usize {
        Corner::ALL
            .into_iter()
            .filter(|c| self.cancel(*c).is_some())
            .count()
    }

    /// Offers a map click to the pending arms.
    ///
    /// Every armed corner is stamped with `point` and disarmed. Returns
    /// `None`, with no state change, when nothing is armed.
    pub fn on_map_click(&mut self, point: Point) -> Option<CaptureEvent> {
        if !self.is_armed() {
            return None;
        }
        let fired = [self.pending[0].take(), self.pending[1].take()];
        for corner in Corner::ALL {
            if fired[corner.slot()].is_some() {
                self.set_corner(corner, point);
            }
        }
        Some(CaptureEvent { point, fired })
    }

    /// Stamps `corner` directly, bypassing the arm.
    ///
    /// Any pending arm is left in place.
    pub fn set_corner(&mut self, corner: Corner, point: Point) {
        self.corners[corner.slot()] = Some(point);
    }

    /// Returns the captured point for `corner`.
    #[must_use]
    pub fn corner(&self, corner: Corner) -> Option<Point> {
        self.corners[corner.slot()]
    }

    /// Forgets both corners. Pending arms stay armed.
    pub fn clear(&mut self) {
        self.corners = [None; 2];
    }

    /// Returns the normalized rectangle spanned by the two corners.
    ///
    /// Corner order does not matter.
    pub fn bounds(&self) -> Result<Rect, IncompleteCapture> {
        match self.corners {
            [Some(a), Some(b)] => Ok(Rect::from_points(a, b)),
            [None, Some(_)] => Err(IncompleteCapture::MissingFirst),
            [Some(_), None] => Err(IncompleteCapture::MissingSecond),
            [None, None] => Err(IncompleteCapture::MissingBoth),
        }
    }
}
