// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure geometry for placing a zoomed image inside a container.
//!
//! Every function here is stateless and takes the container size, the image's
//! natural size and the zoom factor explicitly, so the math can be used (and
//! tested) without any viewport state at all.
//!
//! Offsets are the position of the image's top-left corner relative to the
//! container's top-left corner, in container pixels. Per axis, the valid
//! offsets are:
//!
//! - `[container - scaled, 0]` when the scaled image is larger than the
//!   container, so the image can be dragged until its far edge meets the
//!   container edge;
//! - `[0, container - scaled]` when the scaled image is smaller, so the image
//!   can sit anywhere between flush-left and flush-right.
//!
//! A zero-sized container or image has no overflow at all and only the
//! offset `(0, 0)` is valid. Sizes too large to represent saturate at
//! `f64::MAX` instead.
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use loupe_view::{ZoomFactor, geometry};
//!
//! let container = Size::new(500.0, 500.0);
//! let natural = Size::new(1000.0, 400.0);
//! let bounds = geometry::bounds(container, natural, ZoomFactor::ONE);
//!
//! assert_eq!(bounds.min, Vec2::new(-500.0, 0.0));
//! assert_eq!(bounds.max, Vec2::new(0.0, 100.0));
//! assert_eq!(bounds.clamp(Vec2::new(-900.0, 40.0)), Vec2::new(-500.0, 40.0));
//! ```

use kurbo::{Size, Vec2};

use crate::ZoomFactor;

/// Per-axis range of valid image offsets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OffsetBounds {
    /// Smallest valid offset on each axis.
    pub min: Vec2,
    /// Largest valid offset on each axis.
    pub max: Vec2,
}

impl OffsetBounds {
    /// Bounds that admit only the zero offset.
    pub const ZERO: Self = Self {
        min: Vec2::ZERO,
        max: Vec2::ZERO,
    };

    /// Constrains `offset` into these bounds, axis by axis.
    ///
    /// The result is always finite: NaN resolves to the axis maximum and
    /// infinities resolve to the matching end of the range.
    #[must_use]
    pub fn clamp(&self, offset: Vec2) -> Vec2 {
        Vec2::new(
            clamp_axis(offset.x, self.min.x, self.max.x),
            clamp_axis(offset.y, self.min.y, self.max.y),
        )
    }

    /// Returns `true` if `offset` lies within these bounds on both axes.
    #[must_use]
    pub fn contains(&self, offset: Vec2) -> bool {
        (self.min.x..=self.max.x).contains(&offset.x)
            && (self.min.y..=self.max.y).contains(&offset.y)
    }
}

/// Natural size multiplied by the zoom factor on both axes.
#[must_use]
pub fn scaled_size(natural: Size, zoom: ZoomFactor) -> Size {
    let natural = sanitize(natural);
    let scale = zoom.scale();
    sanitize(Size::new(natural.width * scale, natural.height * scale))
}

/// How far the scaled image extends past the container on each axis.
///
/// Negative components mean the image is smaller than the container on that
/// axis.
#[must_use]
pub fn overflow(container: Size, scaled: Size) -> Vec2 {
    let container = sanitize(container);
    let scaled = sanitize(scaled);
    Vec2::new(
        scaled.width - container.width,
        scaled.height - container.height,
    )
}

/// Valid offset range for an image of `natural` size at `zoom` in `container`.
///
/// Degenerate inputs (a zero width or height on either size) yield
/// [`OffsetBounds::ZERO`].
#[must_use]
pub fn bounds(container: Size, natural: Size, zoom: ZoomFactor) -> OffsetBounds {
    let container = sanitize(container);
    let natural = sanitize(natural);
    if is_degenerate(container) || is_degenerate(natural) {
        return OffsetBounds::ZERO;
    }
    let over = overflow(container, scaled_size(natural, zoom));
    OffsetBounds {
        min: Vec2::new((-over.x).min(0.0), (-over.y).min(0.0)),
        max: Vec2::new((-over.x).max(0.0), (-over.y).max(0.0)),
    }
}

/// Constrains `offset` into `bounds`.
///
/// Equivalent to [`OffsetBounds::clamp`].
#[must_use]
pub fn clamp(offset: Vec2, bounds: OffsetBounds) -> Vec2 {
    bounds.clamp(offset)
}

/// Offset that centers the scaled image on every axis where it is smaller
/// than the container, keeping `current` on the other axes.
///
/// The result is not clamped; pass it through [`bounds`] before storing it.
#[must_use]
pub fn recenter_target(container: Size, natural: Size, zoom: ZoomFactor, current: Vec2) -> Vec2 {
    let container = sanitize(container);
    let scaled = scaled_size(natural, zoom);
    Vec2::new(
        center_axis(container.width, scaled.width).unwrap_or(current.x),
        center_axis(container.height, scaled.height).unwrap_or(current.y),
    )
}

fn center_axis(container: f64, scaled: f64) -> Option<f64> {
    (scaled < container).then(|| (container - scaled) / 2.0)
}

// Written as `max(min, min(max, v))` rather than `f64::clamp`, which panics on
// NaN bounds and propagates a NaN value.
fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    min.max(value.min(max))
}

fn sanitize(size: Size) -> Size {
    Size::new(sanitize_extent(size.width), sanitize_extent(size.height))
}

// NaN and negative extents collapse to zero; `+inf` saturates.
fn sanitize_extent(extent: f64) -> f64 {
    if extent > 0.0 { extent.min(f64::MAX) } else { 0.0 }
}

fn is_degenerate(size: Size) -> bool {
    size.width <= 0.0 || size.height <= 0.0
}
