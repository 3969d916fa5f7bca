//! Civil date-time and unix-time conversion.

use crate::date::CivilDate;
use crate::time::TimeOfDay;

/// A civil date with a wall-clock time, no zone attached.
///
/// Unix-time conversion uses the standard proleptic Gregorian calendar
/// (days-from-civil algorithm), independent of the day counter's leap rule.
/// The inverse may therefore name 29 February in years the counter treats
/// as common; such values display fine but will not revalidate through
/// [`CivilDate::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDateTime {
    date: CivilDate,
    time: TimeOfDay,
}

impl CivilDateTime {
    /// Combines a date and a time.
    pub fn new(date: CivilDate, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Returns the date part.
    pub fn date(self) -> CivilDate {
        self.date
    }

    /// Returns the time part.
    pub fn time(self) -> TimeOfDay {
        self.time
    }

    /// Seconds since 1970-01-01 00:00:00, treating the fields as UTC.
    pub fn to_unix_seconds(self) -> i64 {
        days_from_civil(
            self.date.year(),
            self.date.month(),
            self.date.day(),
        ) * 86_400
            + i64::from(self.time.seconds_from_midnight())
    }

    /// Inverse of [`to_unix_seconds`](Self::to_unix_seconds).
    pub fn from_unix_seconds(seconds: i64) -> Self {
        let days = seconds.div_euclid(86_400);
        let (year, month, day) = civil_from_days(days);
        Self {
            date: CivilDate::from_fields(year, month, day),
            time: TimeOfDay::from_seconds(seconds.rem_euclid(86_400)),
        }
    }
}

/// Days from 1970-01-01 to the given proleptic Gregorian date.
fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let m = i64::from(month);
    let d = i64::from(day);
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let doy = (153 * (m + if m > 2 { -3 } else { 9 }) + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Proleptic Gregorian date for a day count from 1970-01-01.
fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = mp + if mp < 10 { 3 } else { -9 };
    ((y + i64::from(m <= 2)) as i32, m as u8, d as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CivilError;

    fn dt(y: i32, mo: u8, d: u8, h: u8, mi: u8, s: u8) -> Result<CivilDateTime, CivilError> {
        Ok(CivilDateTime::new(
            CivilDate::new(y, mo, d)?,
            TimeOfDay::new(h, mi, s)?,
        ))
    }

    #[test]
    fn unix_epoch() {
        let e = dt(1970, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(e.to_unix_seconds(), 0);
        assert_eq!(CivilDateTime::from_unix_seconds(0), e);
    }

    #[test]
    fn known_timestamps() {
        // 2000-01-01 00:00:00 UTC
        assert_eq!(dt(2000, 1, 1, 0, 0, 0).unwrap().to_unix_seconds(), 946_684_800);
        // 2023-09-16 12:00:00 UTC
        assert_eq!(
            dt(2023, 9, 16, 12, 0, 0).unwrap().to_unix_seconds(),
            1_694_865_600
        );
    }

    #[test]
    fn unix_roundtrip() {
        for &ts in &[0i64, 1, 86_399, 86_400, 946_684_800, 1_694_865_600, -1] {
            assert_eq!(
                CivilDateTime::from_unix_seconds(ts).to_unix_seconds(),
                ts,
                "timestamp {ts}"
            );
        }
    }

    #[test]
    fn gregorian_inverse_knows_true_leap_days() {
        // 2024-02-29 exists in the proleptic Gregorian calendar even though
        // the day counter treats 2024 as common.
        let ts = dt(2024, 2, 28, 0, 0, 0).unwrap().to_unix_seconds() + 86_400;
        let leap_day = CivilDateTime::from_unix_seconds(ts);
        assert_eq!(leap_day.date().month(), 2);
        assert_eq!(leap_day.date().day(), 29);
    }

    #[test]
    fn pre_epoch_times() {
        let t = CivilDateTime::from_unix_seconds(-86_400);
        assert_eq!(t.date().year(), 1969);
        assert_eq!(t.date().month(), 12);
        assert_eq!(t.date().day(), 31);
        assert_eq!(t.time(), TimeOfDay::MIDNIGHT);
    }
}
