//! Error types for the luach-solar crate.

use luach_hebrew::HebrewError;

/// Error type for all fallible operations in the luach-solar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolarError {
    /// Returned when an observer coordinate is out of range.
    #[error("invalid observer location: latitude {latitude}, longitude {longitude}")]
    InvalidObserver {
        /// Latitude in degrees as provided.
        latitude: f64,
        /// Longitude in degrees as provided.
        longitude: f64,
    },

    /// Returned when the sun stays below the target altitude all day.
    #[error("sun does not rise at this location on this date (polar night)")]
    PolarNight,

    /// Returned when the sun stays above the target altitude all day.
    #[error("sun does not set at this location on this date (polar day)")]
    PolarDay,

    /// Returned when an instant maps outside the Hebrew calendar's range.
    #[error(transparent)]
    Date(#[from] HebrewError),
}
