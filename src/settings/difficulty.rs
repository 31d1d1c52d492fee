//! Beatmap difficulty parameters
//!
//! [`BeatmapDifficulty`] is the plain value that overrides are applied to, and
//! [`DifficultyField`] names the fields that can be overridden.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The adjustable fields of a [`BeatmapDifficulty`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DifficultyField {
    DrainRate,
    CircleSize,
    OverallDifficulty,
    ApproachRate,
}

impl DifficultyField {
    /// Every adjustable field, in storage order
    pub const ALL: [DifficultyField; 4] = [
        DifficultyField::DrainRate,
        DifficultyField::CircleSize,
        DifficultyField::OverallDifficulty,
        DifficultyField::ApproachRate,
    ];

    /// Stable key used in external settings payloads
    pub fn external_name(self) -> &'static str {
        match self {
            DifficultyField::DrainRate => "drain_rate",
            DifficultyField::CircleSize => "circle_size",
            DifficultyField::OverallDifficulty => "overall_difficulty",
            DifficultyField::ApproachRate => "approach_rate",
        }
    }

    /// Short label used in settings descriptions
    pub fn acronym(self) -> &'static str {
        match self {
            DifficultyField::DrainRate => "HP",
            DifficultyField::CircleSize => "CS",
            DifficultyField::OverallDifficulty => "OD",
            DifficultyField::ApproachRate => "AR",
        }
    }

    /// Look up a field by its external name
    ///
    /// # Examples
    ///
    /// ```
    /// use difficulty_adjust::settings::DifficultyField;
    ///
    /// assert_eq!(
    ///     DifficultyField::from_external_name("approach_rate"),
    ///     Some(DifficultyField::ApproachRate)
    /// );
    /// assert_eq!(DifficultyField::from_external_name("slider_velocity"), None);
    /// ```
    pub fn from_external_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.external_name() == name)
    }

    pub(crate) fn index(self) -> usize {
        match self {
            DifficultyField::DrainRate => 0,
            DifficultyField::CircleSize => 1,
            DifficultyField::OverallDifficulty => 2,
            DifficultyField::ApproachRate => 3,
        }
    }
}

impl fmt::Display for DifficultyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.external_name())
    }
}

/// Difficulty parameters of a beatmap
///
/// The four adjustable fields are nominally in `0..=10`. Slider multiplier and
/// tick rate are never overridden and always pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeatmapDifficulty {
    pub drain_rate: f64,
    pub circle_size: f64,
    pub overall_difficulty: f64,
    pub approach_rate: f64,
    pub slider_multiplier: f64,
    pub slider_tick_rate: f64,
}

impl Default for BeatmapDifficulty {
    fn default() -> Self {
        Self {
            drain_rate: 5.0,
            circle_size: 5.0,
            overall_difficulty: 5.0,
            approach_rate: 5.0,
            slider_multiplier: 1.4,
            slider_tick_rate: 1.0,
        }
    }
}

impl BeatmapDifficulty {
    /// Get the value of an adjustable field
    pub fn get(&self, field: DifficultyField) -> f64 {
        match field {
            DifficultyField::DrainRate => self.drain_rate,
            DifficultyField::CircleSize => self.circle_size,
            DifficultyField::OverallDifficulty => self.overall_difficulty,
            DifficultyField::ApproachRate => self.approach_rate,
        }
    }

    /// Set the value of an adjustable field
    pub fn set(&mut self, field: DifficultyField, value: f64) {
        match field {
            DifficultyField::DrainRate => self.drain_rate = value,
            DifficultyField::CircleSize => self.circle_size = value,
            DifficultyField::OverallDifficulty => self.overall_difficulty = value,
            DifficultyField::ApproachRate => self.approach_rate = value,
        }
    }

    /// Copy every field, including the pass-through ones, from `other`
    pub fn copy_from(&mut self, other: &BeatmapDifficulty) {
        self.drain_rate = other.drain_rate;
        self.circle_size = other.circle_size;
        self.overall_difficulty = other.overall_difficulty;
        self.approach_rate = other.approach_rate;
        self.slider_multiplier = other.slider_multiplier;
        self.slider_tick_rate = other.slider_tick_rate;
    }
}
