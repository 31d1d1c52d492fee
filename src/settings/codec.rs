//! External settings codec
//!
//! Converts the override state of a [`DifficultyAdjust`] to and from a flat
//! mapping of external field name to value. Only overridden fields are
//! emitted, so an absent key ("not overridden") stays distinct from a key whose
//! value happens to equal the default.
//!
//! Decoding treats its input as untrusted: values are clamped into each
//! field's bounds, unknown keys are ignored, and nothing in the mapping itself
//! can make decoding fail.

use crate::error::Result;
use crate::settings::adjust::DifficultyAdjust;
use crate::settings::difficulty::DifficultyField;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// Acronym identifying difficulty adjustment in a settings envelope
pub const ACRONYM: &str = "DA";

/// Encode the overridden fields of `adjust`
///
/// # Examples
///
/// ```
/// use difficulty_adjust::settings::{codec, DifficultyAdjust, DifficultyField};
///
/// let mut adjust = DifficultyAdjust::new();
/// adjust.setting_mut(DifficultyField::OverallDifficulty).set(4.0);
///
/// let encoded = codec::encode(&adjust);
/// assert_eq!(encoded.len(), 1);
/// assert_eq!(encoded["overall_difficulty"], 4.0);
/// ```
pub fn encode(adjust: &DifficultyAdjust) -> BTreeMap<String, f64> {
    adjust
        .overridden_fields()
        .map(|(field, value)| (field.external_name().to_string(), value))
        .collect()
}

/// Decode external settings into `adjust`
///
/// Every known key is applied through the clamping path. Fields missing from
/// `settings` keep whatever state they had, so call
/// [`DifficultyAdjust::reset_settings_to_defaults`] first for a clean slate.
pub fn decode(settings: &BTreeMap<String, f64>, adjust: &mut DifficultyAdjust) {
    for (name, &value) in settings {
        decode_entry(name, value, adjust);
    }
}

/// Decode a JSON settings object into `adjust`
///
/// Behaves like [`decode`], and additionally skips known keys whose value is
/// not a number.
pub fn decode_value(settings: &Map<String, Value>, adjust: &mut DifficultyAdjust) {
    for (name, value) in settings {
        match value.as_f64() {
            Some(value) => decode_entry(name, value, adjust),
            None if DifficultyField::from_external_name(name).is_some() => {
                log::warn!("ignoring non-numeric value for '{}': {}", name, value);
            }
            None => log::trace!("ignoring unknown setting '{}'", name),
        }
    }
}

fn decode_entry(name: &str, value: f64, adjust: &mut DifficultyAdjust) {
    match DifficultyField::from_external_name(name) {
        Some(field) => adjust.setting_mut(field).set_from_external(value),
        None => log::trace!("ignoring unknown setting '{}'", name),
    }
}

/// Settings envelope as exchanged with a mod settings store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModSettings {
    pub acronym: String,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub settings: Map<String, Value>,
}

impl ModSettings {
    /// Capture the overrides of `adjust` in an envelope
    ///
    /// Non-finite overrides cannot be represented in JSON and are left out.
    pub fn from_adjust(adjust: &DifficultyAdjust) -> Self {
        let mut settings = Map::new();
        for (name, value) in encode(adjust) {
            match Number::from_f64(value) {
                Some(number) => {
                    settings.insert(name, Value::Number(number));
                }
                None => log::warn!("cannot encode non-finite value {} for '{}'", value, name),
            }
        }

        Self {
            acronym: ACRONYM.to_string(),
            settings,
        }
    }

    /// Merge the envelope's settings into `adjust`
    pub fn apply_to_adjust(&self, adjust: &mut DifficultyAdjust) {
        decode_value(&self.settings, adjust);
    }

    /// Save the envelope to a JSON string
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(json)
    }

    /// Load an envelope from a JSON string
    ///
    /// Only malformed JSON is an error; odd setting values are dealt with when
    /// the envelope is applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use difficulty_adjust::settings::{codec::ModSettings, DifficultyAdjust, DifficultyField};
    ///
    /// let envelope = ModSettings::from_json(
    ///     r#"{"acronym":"DA","settings":{"circle_size":-727,"approach_rate":-727}}"#,
    /// )
    /// .unwrap();
    ///
    /// let mut adjust = DifficultyAdjust::new();
    /// envelope.apply_to_adjust(&mut adjust);
    /// assert_eq!(adjust.setting(DifficultyField::CircleSize).value(), Some(0.0));
    /// assert_eq!(adjust.setting(DifficultyField::ApproachRate).value(), Some(-10.0));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let envelope: ModSettings = serde_json::from_str(json)?;
        Ok(envelope)
    }
}
