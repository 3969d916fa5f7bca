//! Epoch arithmetic: leap years, month lengths, and year starts.
//!
//! The calendar runs on a 19-year cycle with 7 leap years, and the start of
//! each year is fixed by estimating the lunar conjunction (molad) of Tishrei
//! in "parts" (1 hour = 1080 parts) and then applying four postponement
//! rules. Everything else in the crate reduces to these functions.

use crate::error::HebrewError;

/// Additive constant aligning this calendar's day numbering with the civil
/// rata-die numbering space (day 1 = January 1, 1 CE).
///
/// 1 Tishrei of year 1 computes to raw elapsed day 1, so its epoch day
/// number is `2 - TISHREI_1_AM_1_OFFSET`. This is the single shared constant
/// between the Hebrew and civil day-number spaces; it must not be inlined
/// anywhere else.
pub const TISHREI_1_AM_1_OFFSET: i64 = 1_373_429;

/// Parts per hour in molad arithmetic.
const PARTS_PER_HOUR: i64 = 1080;

/// Molad parts threshold at or beyond which the conjunction falls at or
/// after noon and the year start is postponed a day.
const NOON_PARTS: i64 = 19440;

/// Parts threshold for the Monday postponement in a common year.
const MONDAY_COMMON_PARTS: i64 = 9924;

/// Parts threshold for the Sunday postponement after a leap year.
const SUNDAY_AFTER_LEAP_PARTS: i64 = 16789;

/// Returns true for the 7 leap years of every 19-year cycle.
pub fn is_leap_year(year: i32) -> bool {
    ((i64::from(year) * 7) + 1) % 19 < 7
}

/// Number of months in the year: 13 in a leap year, 12 otherwise.
pub fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) {
        13
    } else {
        12
    }
}

/// Raw elapsed-day number of 1 Tishrei of `year`, counted from the calendar
/// epoch (before the civil alignment offset is applied).
///
/// Accumulates whole lunar months over complete 19-year cycles plus the
/// months of the current cycle, converts to hours and parts, then applies
/// the four postponement rules in order:
///
/// 1. conjunction at or after noon (>= 19440 parts) postpones a day;
/// 2. Monday with >= 9924 parts in a common year postpones a day;
/// 3. Sunday with >= 16789 parts following a leap year postpones a day;
/// 4. a year may never start on Sunday, Wednesday, or Friday.
pub fn year_start_day(year: i32) -> i64 {
    let y = i64::from(year) - 1;
    let months_elapsed = 235 * (y / 19) + 12 * (y % 19) + (((y % 19) * 7) + 1) / 19;
    let parts_elapsed = ((months_elapsed % PARTS_PER_HOUR) * 793) + 204;
    let hours_elapsed =
        5 + (months_elapsed * 12) + (months_elapsed / PARTS_PER_HOUR) * 793 + parts_elapsed / PARTS_PER_HOUR;
    let mut day = 1 + (29 * months_elapsed) + hours_elapsed / 24;
    let parts = ((hours_elapsed % 24) * PARTS_PER_HOUR) + (parts_elapsed % PARTS_PER_HOUR);

    if parts >= NOON_PARTS
        || (day % 7 == 2 && parts >= MONDAY_COMMON_PARTS && !is_leap_year(year))
        || (day % 7 == 1 && parts >= SUNDAY_AFTER_LEAP_PARTS && is_leap_year(year - 1))
    {
        day += 1;
    }
    if day % 7 == 0 || day % 7 == 3 || day % 7 == 5 {
        day += 1;
    }
    day
}

/// Length of the year in days, always one of {353, 354, 355, 383, 384, 385}.
pub fn year_length(year: i32) -> i64 {
    year_start_day(year + 1) - year_start_day(year)
}

/// True when Cheshvan (month 8) has 30 days (year length ends in 5).
pub fn is_long_cheshvan(year: i32) -> bool {
    year_length(year) % 10 == 5
}

/// True when Kislev (month 9) has 29 days (year length ends in 3).
pub fn is_short_kislev(year: i32) -> bool {
    year_length(year) % 10 == 3
}

/// Length of `month` (1 = Nisan .. 12/13 = Adar/Adar II) in `year`.
///
/// Does not validate the month number; callers outside the crate go through
/// [`HebrewDate::new`](crate::HebrewDate::new), which does.
pub fn month_length(year: i32, month: u8) -> u8 {
    if month == 2 || month == 4 || month == 6 || month == 10 || month == 13 {
        return 29;
    }
    if month == 12 && !is_leap_year(year) {
        return 29;
    }
    if month == 8 && !is_long_cheshvan(year) {
        return 29;
    }
    if month == 9 && is_short_kislev(year) {
        return 29;
    }
    30
}

/// Validates a (year, month, day) triple against the calendar's shape.
pub(crate) fn validate(year: i32, month: u8, day: u8) -> Result<(), HebrewError> {
    if year < 1 {
        return Err(HebrewError::InvalidYear { year });
    }
    let max_month = months_in_year(year);
    if !(1..=max_month).contains(&month) {
        return Err(HebrewError::InvalidMonth {
            month,
            year,
            max_month,
        });
    }
    let max_day = month_length(year, month);
    if !(1..=max_day).contains(&day) {
        return Err(HebrewError::InvalidDay {
            day,
            month,
            year,
            max_day,
        });
    }
    Ok(())
}
