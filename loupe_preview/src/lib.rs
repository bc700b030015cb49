// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Preview: the interactive controller behind a zoomable, pannable
//! preview image.
//!
//! [`PreviewController`] ties together:
//! - `loupe_view`'s [`ViewportState`](loupe_view::ViewportState), which keeps
//!   the image offset inside the container on every write;
//! - `loupe_event_state`'s [`DragState`](loupe_event_state::drag::DragState),
//!   which turns mouse and single-finger touch input into requested offsets;
//! - a one-slot pending zoom, so a zoom chosen before the image has loaded is
//!   applied exactly once when it does (later requests replace earlier ones).
//!
//! The host supplies two collaborators: a [`Container`] that reports the live
//! size of the viewport box, and a [`RenderSink`] that displays the image at
//! the [`ViewTransform`](loupe_view::ViewTransform) it is handed. Nothing is
//! read back from the sink.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use loupe_preview::{PointerInput, PreviewController, RenderSink, ViewTransform};
//!
//! #[derive(Default)]
//! struct Style {
//!     left: f64,
//!     top: f64,
//!     scale: u32,
//! }
//!
//! impl RenderSink for Style {
//!     fn apply_transform(&mut self, t: ViewTransform) {
//!         self.left = t.offset.x;
//!         self.top = t.offset.y;
//!         self.scale = t.zoom.get();
//!     }
//! }
//!
//! let mut preview = PreviewController::new(Size::new(500.0, 500.0), Style::default());
//!
//! // The slider moves before the processed image arrives: the zoom waits.
//! preview.request_zoom(2.0).unwrap();
//! preview.replace_image();
//! preview.image_loaded(Size::new(1000.0, 400.0));
//! assert_eq!(preview.sink().scale, 2);
//!
//! // Drag the image 30px left.
//! preview.handle_input(PointerInput::MouseDown(Point::new(100.0, 100.0)));
//! preview.handle_input(PointerInput::MouseMove(Point::new(70.0, 100.0)));
//! preview.handle_input(PointerInput::MouseUp);
//! assert_eq!(preview.viewport().offset(), Vec2::new(-30.0, 0.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod seams;

pub use controller::{DEFAULT_MAX_ZOOM, PreviewController};
pub use seams::{Container, RenderSink};

pub use loupe_event_state::PointerInput;
pub use loupe_event_state::drag::DragOutcome;
pub use loupe_view::{ViewTransform, ViewportDebugInfo, ZoomError, ZoomFactor};
