//! Clock time of day.

use crate::error::CivilError;

/// A wall-clock time, seconds precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// Creates a time from hour, minute, and second.
    ///
    /// # Errors
    ///
    /// Returns [`CivilError::InvalidTime`] if any field is out of range.
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, CivilError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(CivilError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Midnight.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Builds a time from a second count within the day (0..86400).
    pub(crate) fn from_seconds(seconds: i64) -> Self {
        let s = seconds.rem_euclid(86_400);
        Self {
            hour: (s / 3600) as u8,
            minute: ((s / 60) % 60) as u8,
            second: (s % 60) as u8,
        }
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59).
    pub fn second(self) -> u8 {
        self.second
    }

    /// Seconds elapsed since midnight.
    pub fn seconds_from_midnight(self) -> u32 {
        u32::from(self.hour) * 3600 + u32::from(self.minute) * 60 + u32::from(self.second)
    }
}
