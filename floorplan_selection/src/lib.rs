// Copyright 2026 the Floorplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Floorplan Selection: focus and capture state machines.
//!
//! This crate tracks two small, orthogonal pieces of interaction state:
//!
//! - [`Focus`]: the single currently focused region, if any. It does not
//!   know what regions exist; callers pass an existence check when selecting
//!   so that unknown keys are reported as misses and leave the state alone.
//! - [`Capture`]: the two-corner protocol used to author a new region. Arming
//!   a corner issues a [`CaptureToken`]; the next map click consumes the
//!   token and stamps that corner. Arming the same corner again before the
//!   click replaces its token, so each corner has at most one pending arm.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use floorplan_selection::{Capture, Corner, Focus, FocusChange};
//!
//! let known = ["A1", "B2"];
//! let mut focus = Focus::new();
//! assert!(matches!(
//!     focus.select_with("A1", |k| known.contains(k)),
//!     FocusChange::Focused { previous: None }
//! ));
//! assert!(matches!(focus.select_with("ZZ", |k| known.contains(k)), FocusChange::Missed("ZZ")));
//! assert_eq!(focus.current(), Some(&"A1"));
//!
//! let mut capture = Capture::new();
//! capture.arm(Corner::First);
//! capture.on_map_click(Point::new(10.0, 20.0));
//! capture.arm(Corner::Second);
//! capture.on_map_click(Point::new(30.0, 5.0));
//! assert_eq!(capture.bounds(), Ok(Rect::new(10.0, 5.0, 30.0, 20.0)));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod capture;
mod focus;

pub use capture::{
    Armed, Capture, CaptureEvent, CaptureToken, Corner, IncompleteCapture, PendingCapture,
};
pub use focus::{Focus, FocusChange};
