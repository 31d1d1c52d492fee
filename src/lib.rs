//! # difficulty-adjust
//!
//! `difficulty-adjust` manages user overrides of beatmap difficulty parameters
//! (drain rate, circle size, overall difficulty, approach rate).
//!
//! The library provides:
//! - Per-field overrides that stay in effect across any number of applications
//! - Pass-through of every field that is not overridden
//! - A flat settings codec that only carries overridden fields and clamps
//!   untrusted input into each field's bounds
//! - Per-field limits configurable from JSON
//!
//! ## Basic Usage
//!
//! ```
//! use difficulty_adjust::{BeatmapDifficulty, DifficultyAdjust, DifficultyField};
//!
//! let mut adjust = DifficultyAdjust::new();
//! adjust.setting_mut(DifficultyField::ApproachRate).set(9.0);
//!
//! let base = BeatmapDifficulty { approach_rate: 7.0, ..Default::default() };
//! assert_eq!(adjust.apply(&base).approach_rate, 9.0);
//! ```

// Public modules
pub mod error;

// Settings system
pub mod settings;

// Re-exports for convenience
pub use error::{AdjustError, Result};
pub use settings::{BeatmapDifficulty, DifficultyAdjust, DifficultyField, RangedValue};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
