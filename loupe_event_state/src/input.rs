// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Pointer input relevant to dragging, in client coordinates.
///
/// Hosts translate their platform events into these:
///
/// - `MouseDown` and `TouchStart` should only be forwarded when they land on
///   the draggable region;
/// - moves and releases should be forwarded from anywhere, so a drag that
///   leaves the region keeps tracking until the pointer is released.
///
/// Touch variants carry every contact currently on the surface, in the
/// platform's order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput<'a> {
    /// A mouse button was pressed over the draggable region.
    MouseDown(Point),
    /// The mouse moved.
    MouseMove(Point),
    /// A mouse button was released.
    MouseUp,
    /// One or more fingers touched the draggable region.
    TouchStart(&'a [Point]),
    /// One or more fingers moved.
    TouchMove(&'a [Point]),
    /// A finger was lifted.
    TouchEnd,
    /// The platform cancelled the touch sequence.
    TouchCancel,
}
