//! The fourteen-way year classification driving the reading cycle.

use crate::date::HebrewDate;
use crate::epoch::year_length;
use crate::error::HebrewError;
use crate::weekday::Weekday;

/// One of the fourteen possible year configurations (keviyot).
///
/// A year is fully characterized by the weekday it starts on, its length
/// class (deficient/regular/complete, common or leap), and the weekday of
/// 15 Nisan. Only these fourteen combinations can occur. Variant order
/// matches the classification table row order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearType {
    /// Common 353-day year starting Monday, Passover on Tuesday.
    MonDeficientTue,
    /// Common 353-day year starting Saturday, Passover on Sunday.
    SatDeficientSun,
    /// Common 354-day year starting Tuesday, Passover on Thursday.
    TueRegularThu,
    /// Common 354-day year starting Thursday, Passover on Saturday.
    ThuRegularSat,
    /// Common 355-day year starting Monday, Passover on Thursday.
    MonCompleteThu,
    /// Common 355-day year starting Thursday, Passover on Sunday.
    ThuCompleteSun,
    /// Common 355-day year starting Saturday, Passover on Tuesday.
    SatCompleteTue,
    /// Leap 383-day year starting Monday, Passover on Thursday.
    MonDeficientThu,
    /// Leap 383-day year starting Thursday, Passover on Sunday.
    ThuDeficientSun,
    /// Leap 383-day year starting Saturday, Passover on Tuesday.
    SatDeficientTue,
    /// Leap 384-day year starting Tuesday, Passover on Saturday.
    TueRegularSat,
    /// Leap 385-day year starting Monday, Passover on Saturday.
    MonCompleteSat,
    /// Leap 385-day year starting Thursday, Passover on Tuesday.
    ThuCompleteTue,
    /// Leap 385-day year starting Saturday, Passover on Thursday.
    SatCompleteThu,
}

/// Classification rows: (start weekday, year length − 300, Passover weekday).
///
/// Row order is load-bearing for [`YearType::index`] and must match the
/// reading schedule's row order.
const ROWS: [(Weekday, i64, Weekday, YearType); 14] = [
    (Weekday::Monday, 53, Weekday::Tuesday, YearType::MonDeficientTue),
    (Weekday::Saturday, 53, Weekday::Sunday, YearType::SatDeficientSun),
    (Weekday::Tuesday, 54, Weekday::Thursday, YearType::TueRegularThu),
    (Weekday::Thursday, 54, Weekday::Saturday, YearType::ThuRegularSat),
    (Weekday::Monday, 55, Weekday::Thursday, YearType::MonCompleteThu),
    (Weekday::Thursday, 55, Weekday::Sunday, YearType::ThuCompleteSun),
    (Weekday::Saturday, 55, Weekday::Tuesday, YearType::SatCompleteTue),
    (Weekday::Monday, 83, Weekday::Thursday, YearType::MonDeficientThu),
    (Weekday::Thursday, 83, Weekday::Sunday, YearType::ThuDeficientSun),
    (Weekday::Saturday, 83, Weekday::Tuesday, YearType::SatDeficientTue),
    (Weekday::Tuesday, 84, Weekday::Saturday, YearType::TueRegularSat),
    (Weekday::Monday, 85, Weekday::Saturday, YearType::MonCompleteSat),
    (Weekday::Thursday, 85, Weekday::Tuesday, YearType::ThuCompleteTue),
    (Weekday::Saturday, 85, Weekday::Thursday, YearType::SatCompleteThu),
];

impl YearType {
    /// Classifies `year` against the fourteen rows.
    ///
    /// # Errors
    ///
    /// Returns [`HebrewError::InvalidYear`] for years below 1 and
    /// [`HebrewError::UnclassifiedYear`] if no row matches; every valid
    /// year matches exactly one row, so the latter signals an internal
    /// inconsistency and is never papered over with a default row.
    pub fn classify(year: i32) -> Result<Self, HebrewError> {
        let start_weekday = HebrewDate::new(year, 7, 1)?.weekday();
        let length = year_length(year);
        let pesach_weekday = HebrewDate::new(year, 1, 15)?.weekday();

        for &(w1, code, w2, year_type) in &ROWS {
            if start_weekday == w1 && length - 300 == code && pesach_weekday == w2 {
                return Ok(year_type);
            }
        }
        Err(HebrewError::UnclassifiedYear {
            year,
            start_weekday: start_weekday.number(),
            length,
            pesach_weekday: pesach_weekday.number(),
        })
    }

    /// Row index 0..=13, used to select the year's reading schedule.
    pub fn index(self) -> usize {
        ROWS.iter()
            .position(|&(_, _, _, t)| t == self)
            .expect("every variant has a row")
    }

    /// True for the seven leap configurations.
    pub fn is_leap(self) -> bool {
        self.index() >= 7
    }
}
