// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Event State: the pointer drag state machine used to pan a preview
//! image.
//!
//! [`drag::DragState`] has two states, idle and dragging. A drag session
//! anchors the pointer position and the image offset at drag start, and every
//! later move is measured from that anchor. Rounding therefore never drifts,
//! and the image position depends only on how far the pointer has travelled in
//! total, however many move events arrive.
//!
//! The crate assumes no UI framework. Hosts translate mouse and touch events
//! into [`PointerInput`] values and feed them to [`drag::DragState::handle`],
//! which reports a [`drag::DragOutcome`]. Clamping the requested offset is
//! left to the caller (see `loupe_view::ViewportState::set_position`).
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use loupe_event_state::PointerInput;
//! use loupe_event_state::drag::{DragOutcome, DragState};
//!
//! let mut drag = DragState::default();
//! let offset = Vec2::new(-20.0, 0.0);
//!
//! // One finger down on the image.
//! let touches = [Point::new(50.0, 50.0)];
//! assert_eq!(
//!     drag.handle(PointerInput::TouchStart(&touches), offset, true),
//!     DragOutcome::Started
//! );
//!
//! // Slide it 10px right.
//! let touches = [Point::new(60.0, 50.0)];
//! assert_eq!(
//!     drag.handle(PointerInput::TouchMove(&touches), offset, true),
//!     DragOutcome::Moved(Vec2::new(-10.0, 0.0))
//! );
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod drag;
mod input;

pub use input::PointerInput;
