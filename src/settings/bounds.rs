//! Setting bounds implementation
//!
//! This module provides the inclusive numeric range attached to each
//! difficulty setting. Bounds are carried per setting rather than as global
//! constants, since e.g. approach rate accepts a wider range than drain rate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when working with setting bounds
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BoundsError {
    #[error("Invalid bounds: min ({min}) must not be greater than max ({max})")]
    InvalidBounds { min: f64, max: f64 },

    #[error("Bounds must not be NaN")]
    NanBound,
}

/// Inclusive range `[min, max]` of values a setting may hold
///
/// The fields are private so every `Bounds` goes through [`Bounds::new`],
/// deserialization included; `min <= max` and neither end is NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBounds")]
pub struct Bounds {
    /// Minimum allowed value
    min: f64,

    /// Maximum allowed value
    max: f64,
}

/// Unchecked wire form of [`Bounds`]
#[derive(Deserialize)]
struct RawBounds {
    min: f64,
    max: f64,
}

impl TryFrom<RawBounds> for Bounds {
    type Error = BoundsError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Bounds::new(raw.min, raw.max)
    }
}

impl Bounds {
    /// Create a new range from min and max values
    ///
    /// # Arguments
    ///
    /// * `min` - Minimum allowed value
    /// * `max` - Maximum allowed value
    ///
    /// # Returns
    ///
    /// A new `Bounds` object if min <= max, or an error otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use difficulty_adjust::settings::bounds::Bounds;
    ///
    /// let bounds = Bounds::new(-10.0, 11.0).unwrap();
    /// assert_eq!(bounds.min(), -10.0);
    /// assert_eq!(bounds.max(), 11.0);
    ///
    /// assert!(Bounds::new(11.0, -10.0).is_err());
    /// ```
    pub fn new(min: f64, max: f64) -> Result<Self, BoundsError> {
        if min.is_nan() || max.is_nan() {
            return Err(BoundsError::NanBound);
        }

        if min > max {
            return Err(BoundsError::InvalidBounds { min, max });
        }

        Ok(Self { min, max })
    }

    /// Build bounds from constant endpoints known to be ordered
    pub(crate) fn from_constants(min: f64, max: f64) -> Self {
        debug_assert!(min <= max);
        Self { min, max }
    }

    /// Minimum allowed value
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Maximum allowed value
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Check if a value is within the bounds (inclusive on both ends)
    pub fn is_within_bounds(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Check if `other` lies entirely inside these bounds
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        other.min >= self.min && other.max <= self.max
    }

    /// Clamp a value to be within the bounds
    ///
    /// NaN is passed through unchanged; callers that accept untrusted input
    /// must reject it before clamping.
    ///
    /// # Examples
    ///
    /// ```
    /// use difficulty_adjust::settings::bounds::Bounds;
    ///
    /// let bounds = Bounds::new(0.0, 11.0).unwrap();
    /// assert_eq!(bounds.clamp(-727.0), 0.0);
    /// assert_eq!(bounds.clamp(4.5), 4.5);
    /// assert_eq!(bounds.clamp(727.0), 11.0);
    /// ```
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }
}
