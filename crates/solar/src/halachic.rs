//! Proportional ("halachic") hours.
//!
//! The night (sunset to sunrise) and the day (sunrise to sunset) each
//! divide into twelve hours whose length follows the season. Hours 0..=11
//! run through the night, 12..=23 through the daylight, and the Hebrew
//! date advances at sunset rather than at midnight.

use luach_hebrew::HebrewDate;

use crate::error::SolarError;
use crate::observer::Observer;
use crate::sun;

/// Epoch day number of the unix epoch (January 1, 1970).
const UNIX_EPOCH_DAY: i64 = 719_163;

const SECONDS_PER_DAY: i64 = 86_400;

/// An instant expressed on the proportional clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProportionalTime {
    date: HebrewDate,
    hour: u8,
    fraction: f64,
}

impl ProportionalTime {
    /// The Hebrew date, already advanced past sunset where applicable.
    pub fn date(self) -> HebrewDate {
        self.date
    }

    /// Hour number 0..=23 (0..=11 night, 12..=23 day).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Fraction of the current proportional hour already elapsed, [0, 1).
    pub fn fraction(self) -> f64 {
        self.fraction
    }
}

/// Maps a unix instant to the proportional clock for `observer`.
///
/// `utc_offset_seconds` fixes the observer's wall clock; no timezone
/// database is involved. The surrounding sunsets and sunrises come from
/// [`sun::sunset`] and [`sun::sunrise`] for the local civil day and its
/// neighbors.
///
/// # Errors
///
/// Returns [`SolarError::PolarNight`]/[`SolarError::PolarDay`] where
/// rise/set are undefined, and a date error if the instant falls outside
/// the Hebrew calendar's range.
pub fn proportional_time(
    observer: Observer,
    unix_seconds: i64,
    utc_offset_seconds: i32,
) -> Result<ProportionalTime, SolarError> {
    let offset = i64::from(utc_offset_seconds);
    let local = unix_seconds + offset;
    let local_day = local.div_euclid(SECONDS_PER_DAY);
    let now = local.rem_euclid(SECONDS_PER_DAY);
    let midnight_utc = local_day * SECONDS_PER_DAY - offset;

    let seconds_of_day = |unix: i64| (unix + offset).rem_euclid(SECONDS_PER_DAY);
    let today_sunrise = seconds_of_day(sun::sunrise(observer, midnight_utc)?);
    let today_sunset = seconds_of_day(sun::sunset(observer, midnight_utc)?);
    let yesterday_sunset = seconds_of_day(sun::sunset(observer, midnight_utc - SECONDS_PER_DAY)?);
    let tomorrow_sunrise = seconds_of_day(sun::sunrise(observer, midnight_utc + SECONDS_PER_DAY)?);

    let mut date = HebrewDate::from_days_since_epoch(local_day + UNIX_EPOCH_DAY)?;
    let hour;
    let index;
    if now >= today_sunset {
        // Sunset to midnight: the Hebrew date has already turned over. The
        // sunset second itself opens the night's first hour.
        let night_len = tomorrow_sunrise + SECONDS_PER_DAY - today_sunset;
        let secs = now - today_sunset;
        hour = secs as f64 / night_len as f64 * 12.0;
        index = hour as u8;
        date = date.plus_days(1)?;
    } else if now < today_sunrise {
        // Midnight to sunrise: still the night that began yesterday.
        let night_len = SECONDS_PER_DAY - yesterday_sunset + today_sunrise;
        let secs = SECONDS_PER_DAY - yesterday_sunset + now;
        hour = secs as f64 / night_len as f64 * 12.0;
        index = hour as u8;
    } else {
        // Daylight.
        let day_len = today_sunset - today_sunrise;
        let secs = now - today_sunrise;
        hour = secs as f64 / day_len as f64 * 12.0;
        index = 12 + hour as u8;
    }

    Ok(ProportionalTime {
        date,
        hour: index,
        fraction: hour - hour.floor(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn jerusalem() -> Observer {
        Observer::new(31.7683, 35.2137).unwrap()
    }

    const OFFSET: i32 = 10_800; // UTC+3
    // 2024-10-03 00:00 local Jerusalem time.
    const LOCAL_MIDNIGHT: i64 = 1_727_913_600 - 10_800;

    #[test]
    fn afternoon_is_a_day_hour_of_the_same_date() {
        // 15:00 local on October 3, 2024 = 1 Tishrei 5785.
        let t = proportional_time(jerusalem(), LOCAL_MIDNIGHT + 15 * 3600, OFFSET).unwrap();
        assert_eq!(t.date(), HebrewDate::new(5785, 7, 1).unwrap());
        assert_eq!(t.hour(), 20);
        assert_relative_eq!(t.fraction(), 0.5426, epsilon = 1e-3);
    }

    #[test]
    fn evening_advances_the_date() {
        // 20:00 local, after sunset: 2 Tishrei, second night hour.
        let t = proportional_time(jerusalem(), LOCAL_MIDNIGHT + 20 * 3600, OFFSET).unwrap();
        assert_eq!(t.date(), HebrewDate::new(5785, 7, 2).unwrap());
        assert_eq!(t.hour(), 1);
        assert_relative_eq!(t.fraction(), 0.5685, epsilon = 1e-3);
    }

    #[test]
    fn predawn_keeps_the_advanced_date() {
        // 03:00 local the next civil morning, still 2 Tishrei.
        let t = proportional_time(jerusalem(), LOCAL_MIDNIGHT + 27 * 3600, OFFSET).unwrap();
        assert_eq!(t.date(), HebrewDate::new(5785, 7, 2).unwrap());
        assert_eq!(t.hour(), 8);
        assert_relative_eq!(t.fraction(), 0.4630, epsilon = 1e-3);
    }

    #[test]
    fn hours_partition_the_clock() {
        for h in 0..24 {
            let t = proportional_time(jerusalem(), LOCAL_MIDNIGHT + h * 3600, OFFSET).unwrap();
            assert!(t.hour() < 24, "wall hour {h} mapped to {}", t.hour());
            assert!((0.0..1.0).contains(&t.fraction()), "wall hour {h}");
        }
    }

    #[test]
    fn the_sunset_second_opens_the_night() {
        let set = sun::sunset(jerusalem(), LOCAL_MIDNIGHT).unwrap();
        let t = proportional_time(jerusalem(), set, OFFSET).unwrap();
        assert_eq!(t.date(), HebrewDate::new(5785, 7, 2).unwrap());
        assert_eq!(t.hour(), 0);
        assert_eq!(t.fraction(), 0.0);
    }

    #[test]
    fn polar_error_propagates() {
        let svalbard = Observer::new(78.22, 15.65).unwrap();
        // Deep winter: no sunrise to anchor the clock.
        let err = proportional_time(svalbard, 1_734_739_200 + 43_200, 3_600).unwrap_err();
        assert_eq!(err, SolarError::PolarNight);
    }
}
