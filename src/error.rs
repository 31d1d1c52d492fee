use thiserror::Error;

use crate::settings::bounds::BoundsError;

/// Error types for the difficulty-adjust library.
///
/// None of the override operations themselves (`set`, `set_from_external`,
/// `apply`, `encode`, `decode`) produce errors. These variants only come out of
/// building settings from configuration and parsing JSON text.
#[derive(Error, Debug)]
pub enum AdjustError {
    /// Error for invalid bounds on a setting.
    #[error("Bounds error: {0}")]
    Bounds(#[from] BoundsError),

    /// A configured default lies outside the setting's bounds.
    #[error("Default value {default} for '{field}' is outside bounds [{min}, {max}]")]
    DefaultOutOfBounds {
        field: String,
        default: f64,
        min: f64,
        max: f64,
    },

    /// The nominal range of a setting is not contained in its bounds.
    #[error("Nominal range [{nominal_min}, {nominal_max}] for '{field}' exceeds bounds [{min}, {max}]")]
    NominalOutOfBounds {
        field: String,
        nominal_min: f64,
        nominal_max: f64,
        min: f64,
        max: f64,
    },

    /// A configuration entry names a field this library does not know.
    #[error("Unknown difficulty field: {0}")]
    UnknownField(String),

    /// I/O error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for difficulty-adjust operations.
pub type Result<T> = std::result::Result<T, AdjustError>;
