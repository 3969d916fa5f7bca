//! Observer location.

use crate::error::SolarError;

/// A ground observer, in degrees and meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    latitude: f64,
    longitude: f64,
    elevation: f64,
}

impl Observer {
    /// Creates an observer at sea level.
    ///
    /// # Errors
    ///
    /// Returns [`SolarError::InvalidObserver`] if the latitude is outside
    /// ±90° or the longitude outside ±180°.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, SolarError> {
        if !latitude.is_finite()
            || !longitude.is_finite()
            || latitude.abs() > 90.0
            || longitude.abs() > 180.0
        {
            return Err(SolarError::InvalidObserver {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
            elevation: 0.0,
        })
    }

    /// Same observer at `elevation` meters above sea level.
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation.max(0.0);
        self
    }

    /// Latitude in degrees, positive north.
    pub fn latitude(self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees, positive east.
    pub fn longitude(self) -> f64 {
        self.longitude
    }

    /// Elevation in meters above sea level.
    pub fn elevation(self) -> f64 {
        self.elevation
    }
}
