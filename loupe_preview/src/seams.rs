// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The two environment-owned collaborators of a [`PreviewController`](crate::PreviewController).

use core::cell::Cell;

use kurbo::Size;
use loupe_view::ViewTransform;

/// The box the preview image is shown through.
///
/// The controller asks for the size every time it clamps, so an
/// implementation should report the live client size (for example after a
/// responsive layout change), never a value captured earlier.
pub trait Container {
    /// Current client size of the container, in pixels.
    fn client_size(&self) -> Size;
}

impl Container for Size {
    fn client_size(&self) -> Size {
        *self
    }
}

impl Container for Cell<Size> {
    fn client_size(&self) -> Size {
        self.get()
    }
}

impl<T: Container + ?Sized> Container for &T {
    fn client_size(&self) -> Size {
        (**self).client_size()
    }
}

/// A callback sink that displays the image.
///
/// The controller calls [`RenderSink::apply_transform`] after every change
/// to zoom or offset and never reads anything back.
pub trait RenderSink {
    /// Show the image at `transform.zoom`, with its top-left corner at
    /// `transform.offset` inside the container.
    fn apply_transform(&mut self, transform: ViewTransform);

    /// Called when a drag begins (`true`) or ends (`false`).
    ///
    /// Typically used to switch a "grabbing" style on the container.
    fn set_dragging(&mut self, dragging: bool) {
        let _ = dragging;
    }
}

/// Discards every notification.
impl RenderSink for () {
    fn apply_transform(&mut self, _transform: ViewTransform) {}
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn apply_transform(&mut self, transform: ViewTransform) {
        (**self).apply_transform(transform);
    }

    fn set_dragging(&mut self, dragging: bool) {
        (**self).set_dragging(dragging);
    }
}
