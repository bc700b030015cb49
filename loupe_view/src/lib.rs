// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe View: zoom and pan state for a single preview image in a fixed-size
//! container.
//!
//! This crate provides a small, headless model of an image shown through a
//! container box. It focuses on:
//! - Integer zoom factors ([`ZoomFactor`]).
//! - Pure placement geometry: scaled size, overflow, and the range of valid
//!   offsets ([`geometry`]).
//! - Viewport state that keeps the offset inside that range on every write
//!   ([`ViewportState`]).
//!
//! It does **not** own the image element, the container, or any input
//! handling. Callers are expected to:
//! - Report the image's natural size once it has loaded.
//! - Pass the container's current size into every operation that clamps.
//! - Apply the returned [`ViewTransform`] to whatever displays the image.
//! - Wire pointer input into position updates at a higher layer (see
//!   `loupe_event_state` and `loupe_preview`).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use loupe_view::{ViewportState, ZoomFactor};
//!
//! // 500x500 container showing a 1000x400 image.
//! let container = Size::new(500.0, 500.0);
//! let mut view = ViewportState::new();
//! view.set_natural_size(Some(Size::new(1000.0, 400.0)));
//!
//! // The image is shorter than the container, so it gets centered vertically.
//! let t = view.recenter_or_clamp_if_smaller(container).unwrap();
//! assert_eq!(t.offset, Vec2::new(0.0, 50.0));
//!
//! // Dragging far to the left stops once the right edge meets the container.
//! let t = view.set_position(container, Vec2::new(-2000.0, 50.0)).unwrap();
//! assert_eq!(t.offset, Vec2::new(-500.0, 50.0));
//!
//! // Zoom in, then reconcile the offset with the new scale.
//! view.set_zoom(ZoomFactor::new(2).unwrap());
//! let t = view.recenter_or_clamp_if_smaller(container).unwrap();
//! assert_eq!(t.offset, Vec2::new(-500.0, 0.0));
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and integral; the image is never rotated.
//! - For an axis where the scaled image is smaller than the container, any
//!   offset from flush-left to flush-right is valid. The deterministic choice
//!   is made by [`ViewportState::recenter_or_clamp_if_smaller`], which centers.
//! - Offsets are never cached against a container size: a resized container
//!   takes effect on the next write.
//!
//! This crate is `no_std`.

#![no_std]

pub mod geometry;
mod viewport;
mod zoom;

pub use geometry::OffsetBounds;
pub use viewport::{ViewTransform, ViewportDebugInfo, ViewportState};
pub use zoom::{ZoomError, ZoomFactor};
