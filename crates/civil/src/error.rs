//! Error types for the luach-civil crate.

/// Error type for all fallible operations in the luach-civil crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CivilError {
    /// Returned when a year is below 1.
    #[error("invalid year: {year} (must be >= 1)")]
    InvalidYear {
        /// The invalid year that was provided.
        year: i32,
    },

    /// Returned when a month number is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the length of the given month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year for which the day is invalid.
        year: i32,
        /// The number of days in that month.
        max_day: u8,
    },

    /// Returned when an epoch day number has no date in the supported range.
    #[error("day number {day} is outside the supported range")]
    DayOutOfRange {
        /// The offending epoch day number.
        day: i64,
    },

    /// Returned when a time-of-day field is out of range.
    #[error("invalid time: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime {
        /// Hour as provided.
        hour: u8,
        /// Minute as provided.
        minute: u8,
        /// Second as provided.
        second: u8,
    },
}
