//! Weekly Torah reading lookup.

use crate::date::HebrewDate;
use crate::error::HebrewError;
use crate::schedule::SCHEDULE;
use crate::year_type::YearType;

/// One of the 54 weekly Torah readings, numbered 1..=54 in scroll order.
///
/// Number 54 is read on Simchat Torah rather than on a regular Shabbat, so
/// it never appears in a [`Reading`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Parasha {
    Bereshit = 1,
    Noach,
    LechLecha,
    Vayera,
    ChayeiSarah,
    Toldot,
    Vayetze,
    Vayishlach,
    Vayeshev,
    Miketz,
    Vayigash,
    Vayechi,
    Shemot,
    Vaera,
    Bo,
    Beshalach,
    Yitro,
    Mishpatim,
    Terumah,
    Tetzaveh,
    KiTisa,
    Vayakhel,
    Pekudei,
    Vayikra,
    Tzav,
    Shemini,
    Tazria,
    Metzora,
    AchareiMot,
    Kedoshim,
    Emor,
    Behar,
    Bechukotai,
    Bamidbar,
    Naso,
    Behaalotcha,
    Shelach,
    Korach,
    Chukat,
    Balak,
    Pinchas,
    Matot,
    Masei,
    Devarim,
    Vaetchanan,
    Ekev,
    Reeh,
    Shoftim,
    KiTetze,
    KiTavo,
    Nitzavim,
    Vayelech,
    Haazinu,
    VezotHaberachah,
}

impl Parasha {
    /// Reading by scroll-order number, or `None` outside 1..=54.
    pub fn from_number(number: u8) -> Option<Self> {
        const ALL: [Parasha; 54] = [
            Parasha::Bereshit,
            Parasha::Noach,
            Parasha::LechLecha,
            Parasha::Vayera,
            Parasha::ChayeiSarah,
            Parasha::Toldot,
            Parasha::Vayetze,
            Parasha::Vayishlach,
            Parasha::Vayeshev,
            Parasha::Miketz,
            Parasha::Vayigash,
            Parasha::Vayechi,
            Parasha::Shemot,
            Parasha::Vaera,
            Parasha::Bo,
            Parasha::Beshalach,
            Parasha::Yitro,
            Parasha::Mishpatim,
            Parasha::Terumah,
            Parasha::Tetzaveh,
            Parasha::KiTisa,
            Parasha::Vayakhel,
            Parasha::Pekudei,
            Parasha::Vayikra,
            Parasha::Tzav,
            Parasha::Shemini,
            Parasha::Tazria,
            Parasha::Metzora,
            Parasha::AchareiMot,
            Parasha::Kedoshim,
            Parasha::Emor,
            Parasha::Behar,
            Parasha::Bechukotai,
            Parasha::Bamidbar,
            Parasha::Naso,
            Parasha::Behaalotcha,
            Parasha::Shelach,
            Parasha::Korach,
            Parasha::Chukat,
            Parasha::Balak,
            Parasha::Pinchas,
            Parasha::Matot,
            Parasha::Masei,
            Parasha::Devarim,
            Parasha::Vaetchanan,
            Parasha::Ekev,
            Parasha::Reeh,
            Parasha::Shoftim,
            Parasha::KiTetze,
            Parasha::KiTavo,
            Parasha::Nitzavim,
            Parasha::Vayelech,
            Parasha::Haazinu,
            Parasha::VezotHaberachah,
        ];
        if (1..=54).contains(&number) {
            Some(ALL[usize::from(number) - 1])
        } else {
            None
        }
    }

    /// Scroll-order number, 1..=54.
    pub fn number(self) -> u8 {
        self as u8
    }
}

/// The Torah reading of one Shabbat.
///
/// `first` is `None` on a festival Shabbat, where the festival's own reading
/// displaces the weekly one. `second` is set when two readings are doubled
/// into a single week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reading {
    pub first: Option<Parasha>,
    pub second: Option<Parasha>,
}

impl Reading {
    /// A Shabbat with no weekly reading of its own.
    pub const NONE: Reading = Reading {
        first: None,
        second: None,
    };

    /// True when the festival reading displaces the weekly one.
    pub fn is_festival_week(self) -> bool {
        self.first.is_none()
    }

    /// True when two readings are doubled into this week.
    pub fn is_doubled(self) -> bool {
        self.second.is_some()
    }
}

impl HebrewDate {
    /// The weekly reading of the Shabbat on or after this date.
    ///
    /// Non-Saturday dates resolve to the upcoming Saturday first, so every
    /// day of a week reports that week's reading. Annual cycles start on the
    /// first Saturday on or after 23 Tishrei; Saturdays of early Tishrei
    /// still belong to the previous year's cycle and fall back to its row.
    ///
    /// # Errors
    ///
    /// Propagates range and classification errors from the underlying
    /// conversions.
    pub fn weekly_reading(self) -> Result<Reading, HebrewError> {
        let days_to_saturday = i64::from((7 - self.weekday().number()) % 7);
        let shabbat_day = self.days_since_epoch() + days_to_saturday;
        let shabbat = HebrewDate::from_days_since_epoch(shabbat_day)?;

        let mut year = shabbat.year();
        let mut start = cycle_start(year)?;
        if shabbat_day < start {
            if year == 1 {
                // Saturdays before the very first cycle carry no reading.
                return Ok(Reading::NONE);
            }
            year -= 1;
            start = cycle_start(year)?;
        }

        // Cycles span at most 55 Saturdays (a leap year's 385 days are
        // exactly 55 weeks), so the index stays in bounds.
        let week = ((shabbat_day - start) / 7) as usize;
        let row = YearType::classify(year)?.index();
        let (first, second) = SCHEDULE[row][week];
        Ok(Reading {
            first: Parasha::from_number(first),
            second: Parasha::from_number(second),
        })
    }
}

/// Epoch day of the first Saturday on or after 23 Tishrei of `year`.
fn cycle_start(year: i32) -> Result<i64, HebrewError> {
    let base = HebrewDate::new(year, 7, 23)?;
    Ok(base.days_since_epoch() + i64::from((7 - base.weekday().number()) % 7))
}
