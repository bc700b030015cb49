// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state machine: turn pointer positions into requested image offsets.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragState::start`], passing the pointer position,
//!    the image offset at that moment, and whether the image is ready.
//! 2) On each move, call [`DragState::update`] to get the offset the image
//!    should move to. It is always `start_offset + (pointer - start_pointer)`,
//!    so the result depends only on the total displacement.
//! 3) End the drag with [`DragState::end`].
//!
//! [`DragState::handle`] does all three from a single [`PointerInput`] and
//! applies the single-touch rules.
//!
//! The requested offset is not clamped here; the caller routes it through
//! whatever enforces its bounds.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use loupe_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! // Start dragging at (100, 100) while the image sits at (0, 0).
//! assert!(drag.start(Point::new(100.0, 100.0), Vec2::ZERO, true));
//! assert!(drag.is_dragging());
//!
//! // Move to (130, 80): the image should follow by (30, -20).
//! let requested = drag.update(Point::new(130.0, 80.0)).unwrap();
//! assert_eq!(requested, Vec2::new(30.0, -20.0));
//!
//! assert!(drag.end());
//! assert_eq!(drag.update(Point::new(0.0, 0.0)), None);
//! ```

use kurbo::{Point, Vec2};

use crate::input::PointerInput;

/// Anchor captured when a drag begins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Pointer position (client coordinates) at drag start.
    pub start_pointer: Point,
    /// Image offset at drag start.
    pub start_offset: Vec2,
}

impl DragSession {
    /// Offset the image should take when the pointer is at `pointer`.
    #[must_use]
    pub fn requested_offset(&self, pointer: Point) -> Vec2 {
        self.start_offset + (pointer - self.start_pointer)
    }
}

/// Two-state drag machine: [`DragState::Idle`] or [`DragState::Dragging`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    /// No pointer is held down over the image.
    #[default]
    Idle,
    /// A pointer is held down; moves are measured from the session anchor.
    Dragging(DragSession),
}

impl DragState {
    /// Begins a drag at `pointer` with the image currently at `offset`.
    ///
    /// Does nothing and returns `false` if `ready` is `false` (the image has
    /// no known size yet) or if a drag is already in progress, in which case
    /// the existing session is kept.
    pub fn start(&mut self, pointer: Point, offset: Vec2, ready: bool) -> bool {
        if !ready {
            tracing::debug!(?pointer, "drag start ignored: image not ready");
            return false;
        }
        if self.is_dragging() {
            return false;
        }
        *self = Self::Dragging(DragSession {
            start_pointer: pointer,
            start_offset: offset,
        });
        tracing::debug!(?pointer, ?offset, "drag started");
        true
    }

    /// Returns the offset requested by a pointer at `pointer`, or `None` while idle.
    #[must_use]
    pub fn update(&self, pointer: Point) -> Option<Vec2> {
        self.session()
            .map(|session| session.requested_offset(pointer))
    }

    /// Ends the current drag. Returns `true` if a drag was in progress.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        *self = Self::Idle;
        if was_dragging {
            tracing::debug!("drag ended");
        }
        was_dragging
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Returns the active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match self {
            Self::Idle => None,
            Self::Dragging(session) => Some(session),
        }
    }

    /// Feeds one input event through the state machine.
    ///
    /// `offset` is the image's current offset and `ready` whether its natural
    /// size is known; both are only consulted when a drag starts.
    ///
    /// Touch input only ever tracks one contact: a touch start with more than
    /// one finger down is ignored, and a touch move with more than one finger
    /// down does not move the image (the session is kept).
    pub fn handle(&mut self, input: PointerInput<'_>, offset: Vec2, ready: bool) -> DragOutcome {
        match input {
            PointerInput::MouseDown(pointer) => self.start_outcome(pointer, offset, ready),
            PointerInput::TouchStart(touches) => match single_touch(touches) {
                Some(pointer) => self.start_outcome(pointer, offset, ready),
                None => DragOutcome::Ignored,
            },
            PointerInput::MouseMove(pointer) => self.move_outcome(pointer),
            PointerInput::TouchMove(touches) => match single_touch(touches) {
                Some(pointer) => self.move_outcome(pointer),
                None => DragOutcome::Ignored,
            },
            PointerInput::MouseUp | PointerInput::TouchEnd | PointerInput::TouchCancel => {
                if self.end() {
                    DragOutcome::Ended
                } else {
                    DragOutcome::Ignored
                }
            }
        }
    }

    fn start_outcome(&mut self, pointer: Point, offset: Vec2, ready: bool) -> DragOutcome {
        if self.start(pointer, offset, ready) {
            DragOutcome::Started
        } else {
            DragOutcome::Ignored
        }
    }

    fn move_outcome(&self, pointer: Point) -> DragOutcome {
        self.update(pointer)
            .map_or(DragOutcome::Ignored, DragOutcome::Moved)
    }
}

/// What a single input event did to a [`DragState`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragOutcome {
    /// The event had no effect.
    Ignored,
    /// A new drag session began.
    Started,
    /// The pointer moved during a drag; the image should move to this offset.
    Moved(Vec2),
    /// The drag session ended.
    Ended,
}

impl DragOutcome {
    /// Returns `true` if the host should suppress the platform's default
    /// handling of the event (text selection, page scrolling).
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        matches!(self, Self::Started | Self::Moved(_))
    }
}

fn single_touch(touches: &[Point]) -> Option<Point> {
    match touches {
        [only] => Some(*only),
        _ => None,
    }
}
