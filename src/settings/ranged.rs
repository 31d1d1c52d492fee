//! Overridable setting definition and implementation
//!
//! This module provides [`RangedValue`], a single difficulty setting that either
//! tracks whatever base value it is given or pins the result to an override.
//! It has two write paths: [`RangedValue::set`] trusts the caller and stores the
//! value verbatim, while [`RangedValue::set_from_external`] clamps untrusted
//! input into the setting's bounds.

use crate::settings::bounds::Bounds;

/// Override state of a single setting
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Override {
    /// No override: the setting passes the base value through
    #[default]
    Unset,

    /// The setting always resolves to this value
    Overridden(f64),
}

impl Override {
    /// Get the overridden value, if any
    pub fn value(&self) -> Option<f64> {
        match *self {
            Override::Unset => None,
            Override::Overridden(value) => Some(value),
        }
    }

    /// Check if an override is present
    pub fn is_set(&self) -> bool {
        matches!(self, Override::Overridden(_))
    }
}

/// A single overridable difficulty setting
///
/// Holds the current [`Override`] together with the bounds used to validate
/// external input, the nominal gameplay range, and a default value for display.
#[derive(Debug, Clone, PartialEq)]
pub struct RangedValue {
    /// Current override state
    current: Override,

    /// Range that external input is clamped into
    bounds: Bounds,

    /// Everyday gameplay range, always inside `bounds`
    nominal: Bounds,

    /// Value shown when nothing is overridden
    default_value: f64,
}

impl RangedValue {
    /// Create a new setting with the given bounds and default value
    ///
    /// The nominal range starts out equal to `bounds`. The default value is
    /// clamped into the bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use difficulty_adjust::settings::{Bounds, RangedValue};
    ///
    /// let setting = RangedValue::new(Bounds::new(0.0, 10.0).unwrap(), 5.0);
    /// assert!(!setting.is_overridden());
    /// assert_eq!(setting.default_value(), 5.0);
    /// assert_eq!(setting.resolve(7.0), 7.0);
    /// ```
    pub fn new(bounds: Bounds, default_value: f64) -> Self {
        Self {
            current: Override::Unset,
            bounds,
            nominal: bounds,
            default_value: bounds.clamp(default_value),
        }
    }

    /// Narrow the nominal range of this setting
    ///
    /// The nominal range is intersected with the bounds. A nominal range that
    /// does not overlap the bounds at all is ignored.
    pub fn with_nominal(mut self, nominal: Bounds) -> Self {
        let min = nominal.min().max(self.bounds.min());
        let max = nominal.max().min(self.bounds.max());
        if let Ok(nominal) = Bounds::new(min, max) {
            self.nominal = nominal;
        }
        self
    }

    /// Override the setting with a trusted value
    ///
    /// The value is stored verbatim. Keeping it inside the bounds is the
    /// caller's responsibility.
    pub fn set(&mut self, value: f64) {
        self.current = Override::Overridden(value);
    }

    /// Override the setting with an untrusted value
    ///
    /// The value is clamped into the bounds before it is stored. Out-of-range
    /// input never produces an error. NaN cannot be clamped and leaves the
    /// setting unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use difficulty_adjust::settings::{Bounds, RangedValue};
    ///
    /// let mut setting = RangedValue::new(Bounds::new(-10.0, 11.0).unwrap(), 5.0);
    /// setting.set_from_external(-727.0);
    /// assert_eq!(setting.value(), Some(-10.0));
    ///
    /// setting.set_from_external(-9.0);
    /// assert_eq!(setting.value(), Some(-9.0));
    /// ```
    pub fn set_from_external(&mut self, raw: f64) {
        if raw.is_nan() {
            log::warn!("ignoring NaN external value");
            return;
        }

        let clamped = self.bounds.clamp(raw);
        if clamped != raw {
            log::debug!(
                "clamped external value {} into [{}, {}] as {}",
                raw,
                self.bounds.min(),
                self.bounds.max(),
                clamped
            );
        }

        self.current = Override::Overridden(clamped);
    }

    /// Resolve the effective value for a given base value
    ///
    /// Returns the override if one is set, otherwise `base` unchanged.
    pub fn resolve(&self, base: f64) -> f64 {
        match self.current {
            Override::Unset => base,
            Override::Overridden(value) => value,
        }
    }

    /// Drop the override so the setting tracks the base value again
    ///
    /// This does not pin the setting to [`RangedValue::default_value`].
    pub fn reset_to_default(&mut self) {
        self.current = Override::Unset;
    }

    /// Get the current override state
    pub fn current(&self) -> Override {
        self.current
    }

    /// Get the overridden value, if any
    pub fn value(&self) -> Option<f64> {
        self.current.value()
    }

    /// Check if the setting is overridden
    pub fn is_overridden(&self) -> bool {
        self.current.is_set()
    }

    /// Check if the override lies outside the nominal range
    ///
    /// Always `false` when the setting is not overridden.
    pub fn is_extended(&self) -> bool {
        match self.current {
            Override::Unset => false,
            Override::Overridden(value) => !self.nominal.is_within_bounds(value),
        }
    }

    /// Lowest value accepted from external input
    pub fn min(&self) -> f64 {
        self.bounds.min()
    }

    /// Highest value accepted from external input
    pub fn max(&self) -> f64 {
        self.bounds.max()
    }

    /// Range that external input is clamped into
    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Everyday gameplay range
    pub fn nominal(&self) -> &Bounds {
        &self.nominal
    }

    /// Value shown when the setting is not overridden
    pub fn default_value(&self) -> f64 {
        self.default_value
    }
}
