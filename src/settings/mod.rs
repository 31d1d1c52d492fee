//! # Difficulty Settings
//!
//! This module provides per-field overrides for beatmap difficulty parameters.
//! An override pins a field to a chosen value no matter which base difficulty
//! it is applied to; every field without one passes the base value through.
//!
//! ## Core Components
//!
//! - [`Bounds`]: Inclusive range a setting accepts from external input
//! - [`RangedValue`]: A single overridable setting with a trusted and a clamping write path
//! - [`BeatmapDifficulty`] and [`DifficultyField`]: The parameters being adjusted
//! - [`DifficultyAdjust`]: One setting per field, applied with [`DifficultyAdjust::apply`]
//! - [`codec`]: Flat external representation holding only the overridden fields
//! - [`AdjustConfig`]: Per-field limits, loadable from JSON
//!
//! ## Example Usage
//!
//! ```rust
//! use difficulty_adjust::settings::{codec, BeatmapDifficulty, DifficultyAdjust, DifficultyField};
//!
//! let mut adjust = DifficultyAdjust::new();
//! adjust.setting_mut(DifficultyField::OverallDifficulty).set(4.0);
//!
//! // Persist only what was overridden
//! let encoded = codec::encode(&adjust);
//!
//! // Restore into a fresh instance; external values are clamped on the way in
//! let mut restored = DifficultyAdjust::new();
//! codec::decode(&encoded, &mut restored);
//!
//! let adjusted = restored.apply(&BeatmapDifficulty::default());
//! assert_eq!(adjusted.overall_difficulty, 4.0);
//! assert_eq!(adjusted.circle_size, 5.0);
//! ```

pub mod adjust;
pub mod bounds;
pub mod codec;
pub mod config;
pub mod difficulty;
pub mod ranged;

// Re-export key types
pub use adjust::DifficultyAdjust;
pub use bounds::{Bounds, BoundsError};
pub use codec::ModSettings;
pub use config::{AdjustConfig, FieldLimits};
pub use difficulty::{BeatmapDifficulty, DifficultyField};
pub use ranged::{Override, RangedValue};
