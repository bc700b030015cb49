// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Size, Vec2};

use crate::ZoomFactor;
use crate::geometry::{self, OffsetBounds};

/// Zoom and pan state for a single preview image.
///
/// `ViewportState` owns the current [`ZoomFactor`] and pan offset, plus the
/// image's natural size once the image loader has reported it. The container
/// size is never stored: every operation that needs it takes the live value
/// as an argument, so a resized container can never leave a stale clamp
/// behind.
///
/// The offset is only ever written through [`ViewportState::set_position`]
/// (directly, or via [`ViewportState::recenter_or_clamp_if_smaller`]), which
/// always clamps into [`geometry::bounds`]. Both return the resulting
/// [`ViewTransform`] for the caller to hand to its renderer, or `None` if the
/// natural size is not known yet, in which case nothing changes.
#[derive(Clone, Debug, Default)]
pub struct ViewportState {
    zoom: ZoomFactor,
    offset: Vec2,
    natural: Option<Size>,
}

impl ViewportState {
    /// Creates a viewport at zoom `1`, offset `(0, 0)`, with no image loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> ZoomFactor {
        self.zoom
    }

    /// Returns the current offset of the image's top-left corner.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the image's natural size, if it has finished loading.
    #[must_use]
    pub fn natural_size(&self) -> Option<Size> {
        self.natural
    }

    /// Returns `true` once the image's natural size is known.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.natural.is_some()
    }

    /// Returns the current zoom and offset as a single value.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            zoom: self.zoom,
            offset: self.offset,
        }
    }

    /// Records the image's natural size, or `None` while it is not loaded.
    ///
    /// This does not move the image; callers usually follow up with
    /// [`ViewportState::recenter_or_clamp_if_smaller`].
    pub fn set_natural_size(&mut self, natural: Option<Size>) {
        self.natural = natural;
    }

    /// Stores a new zoom factor without moving the image.
    ///
    /// The stored offset may be out of bounds for the new zoom until the
    /// caller runs [`ViewportState::recenter_or_clamp_if_smaller`].
    pub fn set_zoom(&mut self, zoom: ZoomFactor) {
        self.zoom = zoom;
    }

    /// Valid offset range for the current zoom and image in `container`.
    ///
    /// Returns `None` while the natural size is unknown.
    #[must_use]
    pub fn bounds(&self, container: Size) -> Option<OffsetBounds> {
        self.natural
            .map(|natural| geometry::bounds(container, natural, self.zoom))
    }

    /// Clamps `target` into the current bounds and stores it as the offset.
    ///
    /// Returns the new transform, or `None` (leaving the offset untouched)
    /// while the natural size is unknown.
    pub fn set_position(&mut self, container: Size, target: Vec2) -> Option<ViewTransform> {
        let bounds = self.bounds(container)?;
        self.offset = bounds.clamp(target);
        tracing::trace!(
            ?target,
            ?bounds,
            offset = ?self.offset,
            "viewport position clamped"
        );
        Some(self.transform())
    }

    /// Centers the image on every axis where it is smaller than `container`,
    /// keeps the current offset on the others, then clamps.
    ///
    /// Calling this twice in a row is the same as calling it once.
    pub fn recenter_or_clamp_if_smaller(&mut self, container: Size) -> Option<ViewTransform> {
        let natural = self.natural?;
        let target = geometry::recenter_target(container, natural, self.zoom, self.offset);
        self.set_position(container, target)
    }

    /// Returns to zoom `1` and offset `(0, 0)` and forgets the natural size.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self, container: Size) -> ViewportDebugInfo {
        ViewportDebugInfo {
            container,
            natural: self.natural,
            scaled: self
                .natural
                .map(|natural| geometry::scaled_size(natural, self.zoom)),
            zoom: self.zoom,
            offset: self.offset,
            bounds: self.bounds(container),
        }
    }
}

/// Zoom and offset to apply to the displayed image.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Uniform scale applied to the natural image size.
    pub zoom: ZoomFactor,
    /// Position of the image's top-left corner in container pixels.
    pub offset: Vec2,
}

impl ViewTransform {
    /// Natural size, zero offset.
    pub const IDENTITY: Self = Self {
        zoom: ZoomFactor::ONE,
        offset: Vec2::ZERO,
    };

    /// Image → container transform: scale by the zoom, then translate by the
    /// offset.
    ///
    /// Useful for renderers that draw the image themselves rather than
    /// positioning an element.
    #[must_use]
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom.scale())
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Debug snapshot of a [`ViewportState`].
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Container size the snapshot was taken against.
    pub container: Size,
    /// Natural image size, if loaded.
    pub natural: Option<Size>,
    /// Natural size multiplied by the zoom, if loaded.
    pub scaled: Option<Size>,
    /// Current zoom factor.
    pub zoom: ZoomFactor,
    /// Current offset.
    pub offset: Vec2,
    /// Valid offset range, if loaded.
    pub bounds: Option<OffsetBounds>,
}
