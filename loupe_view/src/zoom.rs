// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::num::NonZeroU32;

/// Linear, integer scale applied uniformly to both axes of an image's natural size.
///
/// A `ZoomFactor` is always at least `1`; the type cannot represent anything
/// else, so code holding one never has to re-validate it.
///
/// Raw values coming from a slider or other untyped input are converted with
/// `TryFrom<f64>`, which rejects non-positive, fractional and non-finite
/// values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ZoomFactor(NonZeroU32);

impl ZoomFactor {
    /// Identity zoom: the image is shown at its natural size.
    pub const ONE: Self = Self(NonZeroU32::MIN);

    /// Creates a zoom factor, returning `None` for `0`.
    #[must_use]
    pub const fn new(factor: u32) -> Option<Self> {
        match NonZeroU32::new(factor) {
            Some(factor) => Some(Self(factor)),
            None => None,
        }
    }

    /// Returns the factor as an integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the factor as a floating point multiplier.
    #[must_use]
    pub fn scale(self) -> f64 {
        f64::from(self.0.get())
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self::ONE
    }
}

impl From<ZoomFactor> for u32 {
    fn from(zoom: ZoomFactor) -> Self {
        zoom.get()
    }
}

impl TryFrom<u32> for ZoomFactor {
    type Error = ZoomError;

    fn try_from(factor: u32) -> Result<Self, Self::Error> {
        Self::new(factor).ok_or(ZoomError::NotPositive)
    }
}

impl TryFrom<f64> for ZoomFactor {
    type Error = ZoomError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(ZoomError::NotFinite);
        }
        if value <= 0.0 {
            return Err(ZoomError::NotPositive);
        }
        if value > f64::from(u32::MAX) {
            return Err(ZoomError::TooLarge);
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "value is finite and within 0..=u32::MAX, truncation is the integrality test"
        )]
        let truncated = value as u32;
        if f64::from(truncated) != value {
            return Err(ZoomError::NotInteger);
        }
        Self::try_from(truncated)
    }
}

impl fmt::Display for ZoomFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.get())
    }
}

/// Error returned when a requested zoom cannot be used.
///
/// The previously applied zoom is always retained when one of these is
/// produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomError {
    /// The requested value was zero or negative.
    NotPositive,
    /// The requested value had a fractional part.
    NotInteger,
    /// The requested value was NaN or infinite.
    NotFinite,
    /// The requested value does not fit a 32-bit factor.
    TooLarge,
    /// The requested factor is valid but falls outside the configured limits.
    OutOfRange {
        /// The factor that was asked for.
        requested: ZoomFactor,
        /// The smallest factor currently accepted.
        min: ZoomFactor,
        /// The largest factor currently accepted.
        max: ZoomFactor,
    },
}

impl fmt::Display for ZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotPositive => f.write_str("zoom factor must be positive"),
            Self::NotInteger => f.write_str("zoom factor must be a whole number"),
            Self::NotFinite => f.write_str("zoom factor must be finite"),
            Self::TooLarge => f.write_str("zoom factor does not fit in 32 bits"),
            Self::OutOfRange {
                requested,
                min,
                max,
            } => write!(f, "zoom factor {requested} is outside {min}..={max}"),
        }
    }
}

impl core::error::Error for ZoomError {}
