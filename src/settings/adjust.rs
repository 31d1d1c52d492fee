//! Difficulty adjustment
//!
//! [`DifficultyAdjust`] owns one [`RangedValue`] per [`DifficultyField`] and
//! applies the current overrides to any [`BeatmapDifficulty`] it is given.
//! Fields without an override always pass the base value through, and
//! overrides stay in effect until they are reset or reassigned, no matter how
//! many bases they are applied to.

use crate::error::Result;
use crate::settings::config::{AdjustConfig, FieldLimits};
use crate::settings::difficulty::{BeatmapDifficulty, DifficultyField};
use crate::settings::ranged::RangedValue;

/// Order in which overridden fields appear in [`DifficultyAdjust::settings_description`]
const DESCRIPTION_ORDER: [DifficultyField; 4] = [
    DifficultyField::CircleSize,
    DifficultyField::DrainRate,
    DifficultyField::OverallDifficulty,
    DifficultyField::ApproachRate,
];

/// Per-field difficulty overrides
///
/// Readers (`apply`, `encode`) only need `&self` and writers need `&mut self`,
/// so the borrow checker enforces single-writer access. There is no internal
/// locking.
///
/// # Examples
///
/// ```
/// use difficulty_adjust::settings::{BeatmapDifficulty, DifficultyAdjust, DifficultyField};
///
/// let mut adjust = DifficultyAdjust::new();
/// adjust.setting_mut(DifficultyField::CircleSize).set(4.0);
///
/// let base = BeatmapDifficulty { circle_size: 7.0, approach_rate: 9.0, ..Default::default() };
/// let adjusted = adjust.apply(&base);
///
/// assert_eq!(adjusted.circle_size, 4.0);
/// assert_eq!(adjusted.approach_rate, 9.0);
/// assert_eq!(base.circle_size, 7.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyAdjust {
    /// Settings in [`DifficultyField::ALL`] order
    settings: [RangedValue; 4],
}

impl Default for DifficultyAdjust {
    fn default() -> Self {
        Self {
            settings: DifficultyField::ALL.map(FieldLimits::reference_setting),
        }
    }
}

impl DifficultyAdjust {
    /// Create an adjustment with reference limits and no overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an adjustment with limits taken from a configuration
    ///
    /// # Returns
    ///
    /// A new adjustment with no overrides, or an error if the configuration is
    /// inconsistent
    pub fn with_config(config: &AdjustConfig) -> Result<Self> {
        Ok(Self {
            settings: config.build_settings()?,
        })
    }

    /// Get the setting of a field
    pub fn setting(&self, field: DifficultyField) -> &RangedValue {
        &self.settings[field.index()]
    }

    /// Get a mutable reference to the setting of a field
    pub fn setting_mut(&mut self, field: DifficultyField) -> &mut RangedValue {
        &mut self.settings[field.index()]
    }

    /// Iterate over every field together with its setting
    pub fn settings(&self) -> impl Iterator<Item = (DifficultyField, &RangedValue)> {
        DifficultyField::ALL.into_iter().zip(self.settings.iter())
    }

    /// Iterate over the fields that currently carry an override, with their values
    pub fn overridden_fields(&self) -> impl Iterator<Item = (DifficultyField, f64)> + '_ {
        self.settings()
            .filter_map(|(field, setting)| setting.value().map(|value| (field, value)))
    }

    /// Apply the overrides to a base difficulty
    ///
    /// The base is never modified. Overridden fields take the override value
    /// and every other field, pass-through fields included, is copied from
    /// `base`. The result depends only on `base` and the current overrides.
    pub fn apply(&self, base: &BeatmapDifficulty) -> BeatmapDifficulty {
        let mut adjusted = *base;
        self.apply_to(&mut adjusted);
        adjusted
    }

    /// Apply the overrides in place
    pub fn apply_to(&self, difficulty: &mut BeatmapDifficulty) {
        for (field, setting) in self.settings() {
            difficulty.set(field, setting.resolve(difficulty.get(field)));
        }
    }

    /// Drop every override
    ///
    /// Afterwards `apply` returns its base unchanged until new overrides are set.
    pub fn reset_settings_to_defaults(&mut self) {
        for setting in self.settings.iter_mut() {
            setting.reset_to_default();
        }
    }

    /// Check if no field is overridden
    pub fn uses_default_configuration(&self) -> bool {
        self.settings.iter().all(|setting| !setting.is_overridden())
    }

    /// Check if any override lies outside its field's nominal range
    pub fn uses_extended_limits(&self) -> bool {
        self.settings.iter().any(RangedValue::is_extended)
    }

    /// Short human-readable summary of the overrides, e.g. `"CS 4, AR 9.5"`
    ///
    /// Empty when nothing is overridden.
    pub fn settings_description(&self) -> String {
        DESCRIPTION_ORDER
            .iter()
            .filter_map(|&field| {
                self.setting(field)
                    .value()
                    .map(|value| format!("{} {}", field.acronym(), value))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
