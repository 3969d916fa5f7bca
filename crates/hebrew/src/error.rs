//! Error types for the luach-hebrew crate.

/// Error type for all fallible operations in the luach-hebrew crate.
///
/// Covers field validation for Hebrew dates, the inverse day-number
/// conversion, and year-type classification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HebrewError {
    /// Returned when a year is below 1 (the calendar epoch year).
    #[error("invalid year: {year} (must be >= 1)")]
    InvalidYear {
        /// The invalid year that was provided.
        year: i32,
    },

    /// Returned when a month number is outside the valid range for the year.
    #[error("invalid month: {month} for year {year} (must be 1..={max_month})")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
        /// The year for which the month is invalid.
        year: i32,
        /// The number of months in that year (12 or 13).
        max_month: u8,
    },

    /// Returned when a day number exceeds the length of the given month.
    #[error("invalid day: {day} for {year}-{month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year for which the day is invalid.
        year: i32,
        /// The length of that month in that year.
        max_day: u8,
    },

    /// Returned when a day number precedes 1 Tishrei of year 1, or when the
    /// inverse-conversion scan exhausts its iteration cap.
    #[error("day number {day} is outside the supported calendar range")]
    DayOutOfRange {
        /// The offending epoch day number.
        day: i64,
    },

    /// Returned when a year matches none of the fourteen classification rows.
    ///
    /// By calendrical construction every valid year matches exactly one row,
    /// so this indicates an internal inconsistency rather than bad input.
    #[error("year {year} matches no year-type row (start weekday {start_weekday}, length {length}, passover weekday {pesach_weekday})")]
    UnclassifiedYear {
        /// The year that failed to classify.
        year: i32,
        /// Weekday number (1=Sunday..7=Saturday) of 1 Tishrei.
        start_weekday: u8,
        /// Length of the year in days.
        length: i64,
        /// Weekday number of 15 Nisan.
        pesach_weekday: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_year() {
        let err = HebrewError::InvalidYear { year: 0 };
        assert_eq!(err.to_string(), "invalid year: 0 (must be >= 1)");
    }

    #[test]
    fn error_invalid_month() {
        let err = HebrewError::InvalidMonth {
            month: 13,
            year: 5783,
            max_month: 12,
        };
        assert_eq!(
            err.to_string(),
            "invalid month: 13 for year 5783 (must be 1..=12)"
        );
    }

    #[test]
    fn error_invalid_day() {
        let err = HebrewError::InvalidDay {
            day: 30,
            month: 2,
            year: 5783,
            max_day: 29,
        };
        assert_eq!(err.to_string(), "invalid day: 30 for 5783-2 (max 29)");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<HebrewError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<HebrewError>();
    }
}
