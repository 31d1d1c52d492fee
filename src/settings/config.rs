//! Configuration of per-field limits
//!
//! [`AdjustConfig`] describes the bounds, nominal range and default of every
//! adjustable field. It can be loaded from JSON; fields that are not mentioned
//! keep their reference limits.

use crate::error::{AdjustError, Result};
use crate::settings::bounds::Bounds;
use crate::settings::difficulty::DifficultyField;
use crate::settings::ranged::RangedValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Limits of a single adjustable field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldLimits {
    /// Lowest value accepted from external input
    pub min: f64,

    /// Highest value accepted from external input
    pub max: f64,

    /// Lower end of the everyday gameplay range
    pub nominal_min: f64,

    /// Upper end of the everyday gameplay range
    pub nominal_max: f64,

    /// Value shown when the field is not overridden
    pub default: f64,
}

impl FieldLimits {
    /// Reference limits for a field
    ///
    /// Drain rate and overall difficulty accept `[0, 10]`, circle size
    /// `[0, 11]` and approach rate `[-10, 11]`. The nominal range is `[0, 10]`
    /// and the default is 5 for all of them.
    pub fn reference(field: DifficultyField) -> Self {
        let (min, max) = match field {
            DifficultyField::DrainRate | DifficultyField::OverallDifficulty => (0.0, 10.0),
            DifficultyField::CircleSize => (0.0, 11.0),
            DifficultyField::ApproachRate => (-10.0, 11.0),
        };

        Self {
            min,
            max,
            nominal_min: 0.0,
            nominal_max: 10.0,
            default: 5.0,
        }
    }

    /// Check the limits for consistency and build a setting from them
    pub fn to_ranged_value(&self, field: DifficultyField) -> Result<RangedValue> {
        let bounds = Bounds::new(self.min, self.max)?;
        let nominal = Bounds::new(self.nominal_min, self.nominal_max)?;

        if !bounds.contains_bounds(&nominal) {
            return Err(AdjustError::NominalOutOfBounds {
                field: field.external_name().to_string(),
                nominal_min: nominal.min(),
                nominal_max: nominal.max(),
                min: bounds.min(),
                max: bounds.max(),
            });
        }

        if !bounds.is_within_bounds(self.default) {
            return Err(AdjustError::DefaultOutOfBounds {
                field: field.external_name().to_string(),
                default: self.default,
                min: bounds.min(),
                max: bounds.max(),
            });
        }

        Ok(RangedValue::new(bounds, self.default).with_nominal(nominal))
    }

    /// Setting with the reference limits of `field`
    pub(crate) fn reference_setting(field: DifficultyField) -> RangedValue {
        let limits = Self::reference(field);
        let bounds = Bounds::from_constants(limits.min, limits.max);
        let nominal = Bounds::from_constants(limits.nominal_min, limits.nominal_max);

        RangedValue::new(bounds, limits.default).with_nominal(nominal)
    }
}

/// Limits for every adjustable field, keyed by external field name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdjustConfig {
    #[serde(default)]
    fields: BTreeMap<String, FieldLimits>,
}

impl AdjustConfig {
    /// Create a configuration that uses the reference limits everywhere
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the limits of one field
    pub fn with_limits(mut self, field: DifficultyField, limits: FieldLimits) -> Self {
        self.fields.insert(field.external_name().to_string(), limits);
        self
    }

    /// Get the limits of a field, falling back to its reference limits
    pub fn limits(&self, field: DifficultyField) -> FieldLimits {
        self.fields
            .get(field.external_name())
            .copied()
            .unwrap_or_else(|| FieldLimits::reference(field))
    }

    /// Build one setting per field, validating every entry
    ///
    /// # Returns
    ///
    /// The settings in [`DifficultyField::ALL`] order, or an error if an entry
    /// names an unknown field or has inconsistent limits
    pub fn build_settings(&self) -> Result<[RangedValue; 4]> {
        if let Some(unknown) = self
            .fields
            .keys()
            .find(|name| DifficultyField::from_external_name(name).is_none())
        {
            return Err(AdjustError::UnknownField(unknown.clone()));
        }

        let [hp, cs, od, ar] = DifficultyField::ALL;
        Ok([
            self.limits(hp).to_ranged_value(hp)?,
            self.limits(cs).to_ranged_value(cs)?,
            self.limits(od).to_ranged_value(od)?,
            self.limits(ar).to_ranged_value(ar)?,
        ])
    }

    /// Load a configuration from a JSON string
    ///
    /// # Examples
    ///
    /// ```
    /// use difficulty_adjust::settings::{AdjustConfig, DifficultyField};
    ///
    /// let json = r#"{
    ///   "fields": {
    ///     "approach_rate": {
    ///       "min": 0.0,
    ///       "max": 10.0,
    ///       "nominal_min": 0.0,
    ///       "nominal_max": 10.0,
    ///       "default": 5.0
    ///     }
    ///   }
    /// }"#;
    ///
    /// let config = AdjustConfig::from_json(json).unwrap();
    /// assert_eq!(config.limits(DifficultyField::ApproachRate).min, 0.0);
    /// assert_eq!(config.limits(DifficultyField::CircleSize).max, 11.0);
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let config: AdjustConfig = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Save the configuration to a JSON string
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }
}
