//! Hebrew calendar date and its conversion to and from epoch day numbers.

use crate::epoch::{
    self, month_length, months_in_year, year_start_day, TISHREI_1_AM_1_OFFSET,
};
use crate::error::HebrewError;
use crate::weekday::Weekday;

/// Iteration cap for the year scan in the inverse conversion.
///
/// The `(day + offset) / 366` estimate undershoots by roughly one year per
/// 485, so 128 iterations cover years well past 50,000. Exceeding the cap
/// means the estimate broke down and is reported as an error, never a hang.
const YEAR_SCAN_CAP: u32 = 128;

/// A date in the Hebrew calendar.
///
/// Month numbering starts at Nisan (1) in the spring, but the calendar year
/// begins at Tishrei (month 7) in the autumn. Months 7..=12/13 of a year
/// therefore precede months 1..=6 of the same year chronologically.
///
/// Values are immutable; day-span arithmetic returns new dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewDate {
    year: i32,
    month: u8,
    day: u8,
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HebrewDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Chronological order: the calendar year runs 7..12/13 then 1..6.
        fn month_ordinal(month: u8) -> u8 {
            if month >= 7 {
                month - 7
            } else {
                month + 7
            }
        }
        (self.year, month_ordinal(self.month), self.day).cmp(&(
            other.year,
            month_ordinal(other.month),
            other.day,
        ))
    }
}

impl HebrewDate {
    /// Creates a new `HebrewDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`HebrewError`] if the year is below 1, the month is outside
    /// `1..=months_in_year(year)`, or the day exceeds the month's length.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, HebrewError> {
        epoch::validate(year, month, day)?;
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1 = Nisan .. 12/13 = Adar/Adar II).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=30).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Epoch day number of this date, shared with the civil numbering space.
    ///
    /// Accumulates month lengths from the start of the calendar year
    /// (Tishrei): for a spring-side month (< 7) that means the whole autumn
    /// side first, then months 1..month-1.
    pub fn days_since_epoch(self) -> i64 {
        let mut res = i64::from(self.day);
        if self.month < 7 {
            for m in 7..=months_in_year(self.year) {
                res += i64::from(month_length(self.year, m));
            }
            for m in 1..self.month {
                res += i64::from(month_length(self.year, m));
            }
        } else {
            for m in 7..self.month {
                res += i64::from(month_length(self.year, m));
            }
        }
        res + year_start_day(self.year) - TISHREI_1_AM_1_OFFSET
    }

    /// Inverse of [`days_since_epoch`](Self::days_since_epoch).
    ///
    /// Starts from a coarse linear year estimate and scans forward a year at
    /// a time, then a month at a time. Both scans are capped; the caps do
    /// not trip for any day number within the supported year range.
    ///
    /// # Errors
    ///
    /// Returns [`HebrewError::DayOutOfRange`] if `day` precedes 1 Tishrei of
    /// year 1 or the year scan exhausts its cap.
    pub fn from_days_since_epoch(day: i64) -> Result<Self, HebrewError> {
        if day < first_of_tishrei(1) {
            return Err(HebrewError::DayOutOfRange { day });
        }
        let mut year = i32::try_from((day + TISHREI_1_AM_1_OFFSET) / 366)
            .map_err(|_| HebrewError::DayOutOfRange { day })?
            .max(1);
        let mut iterations = 0;
        while day >= first_of_tishrei(year + 1) {
            year += 1;
            iterations += 1;
            if iterations > YEAR_SCAN_CAP {
                return Err(HebrewError::DayOutOfRange { day });
            }
        }

        // Autumn side (months 7..) or spring side (months 1..6)?
        let mut month = if day < month_start(year, 1) { 7 } else { 1 };
        while day > month_start(year, month) + i64::from(month_length(year, month)) - 1 {
            month += 1;
            if month > months_in_year(year) {
                return Err(HebrewError::DayOutOfRange { day });
            }
        }
        let day_of_month = day - month_start(year, month) + 1;
        Ok(Self {
            year,
            month,
            day: day_of_month as u8,
        })
    }

    /// Weekday of this date (1 = Sunday .. 7 = Saturday).
    pub fn weekday(self) -> Weekday {
        Weekday::from_epoch_day(self.days_since_epoch())
    }

    /// Returns the date `days` later (earlier for negative spans).
    ///
    /// # Errors
    ///
    /// Returns [`HebrewError::DayOutOfRange`] if the result leaves the
    /// supported range.
    pub fn plus_days(self, days: i64) -> Result<Self, HebrewError> {
        Self::from_days_since_epoch(self.days_since_epoch() + days)
    }

    /// Signed number of days from `other` to `self`.
    pub fn days_since(self, other: HebrewDate) -> i64 {
        self.days_since_epoch() - other.days_since_epoch()
    }
}

/// Epoch day number of 1 Tishrei of `year`.
fn first_of_tishrei(year: i32) -> i64 {
    year_start_day(year) + 1 - TISHREI_1_AM_1_OFFSET
}

/// Epoch day number of the first of `month` in `year`.
fn month_start(year: i32, month: u8) -> i64 {
    let mut res = 1i64;
    if month < 7 {
        for m in 7..=months_in_year(year) {
            res += i64::from(month_length(year, m));
        }
        for m in 1..month {
            res += i64::from(month_length(year, m));
        }
    } else {
        for m in 7..month {
            res += i64::from(month_length(year, m));
        }
    }
    res + year_start_day(year) - TISHREI_1_AM_1_OFFSET
}
