//! Holiday determination, including the movable modern observances.

use crate::date::HebrewDate;
use crate::epoch::{is_leap_year, month_length};
use crate::weekday::Weekday;

/// A holiday or observance on the Hebrew calendar.
///
/// Ordinals only; display names live in the locale tables. The
/// `..Diaspora` variants mark days that carry no significance outside the
/// diaspora calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Holiday {
    Pesach,
    PesachDiaspora,
    CholHamoedPesach,
    PesachSeventh,
    PesachEighthDiaspora,
    HolocaustDay,
    RemembranceDay,
    IndependenceDay,
    SecondPesach,
    LagBaomer,
    JerusalemDay,
    Shavuot,
    ShavuotDiaspora,
    FastOfTamuz,
    FastOfAv,
    TuBeAv,
    RoshHashana,
    RoshHashanaSecond,
    FastOfGedaliah,
    Kippur,
    Sukkot,
    SukkotDiaspora,
    CholHamoedSukkot,
    HoshaanaRabba,
    SheminiAtzeretSimchatTorah,
    SheminiAtzeret,
    SimchatTorah,
    Chanukka1,
    Chanukka2,
    Chanukka3,
    Chanukka4,
    Chanukka5,
    Chanukka6,
    Chanukka7,
    Chanukka8,
    FastOfTevet,
    TuBiShvat,
    FastOfEsther,
    Purim,
    ShushanPurim,
    PurimKatan,
    ShushanPurimKatan,
}

/// First year the Holocaust-day Sunday postponement applies.
const HOLOCAUST_SUNDAY_RULE_FROM: i32 = 5757;

/// First year the Remembrance/Independence-day Sunday and Monday shifts
/// apply.
const INDEPENDENCE_SHIFT_RULE_FROM: i32 = 5764;

impl HebrewDate {
    /// The holiday observed on this date, if any.
    ///
    /// `diaspora` selects the diaspora calendar (second festival days).
    /// Pure: depends only on the date fields and the flag. The per-month
    /// rule order follows the reference behavior so that overlapping rules
    /// (none occur for valid dates) would resolve identically.
    pub fn holiday(self, diaspora: bool) -> Option<Holiday> {
        let (year, month, day) = (self.year(), self.month(), self.day());
        let mut holiday = None;

        // Nisan
        if month == 1 {
            if day == 15 {
                holiday = Some(Holiday::Pesach);
            }
            if day == 16 {
                holiday = Some(if diaspora {
                    Holiday::PesachDiaspora
                } else {
                    Holiday::CholHamoedPesach
                });
            }
            if (17..=20).contains(&day) {
                holiday = Some(Holiday::CholHamoedPesach);
            }
            if day == 21 {
                holiday = Some(Holiday::PesachSeventh);
            }
            if day == 22 && diaspora {
                holiday = Some(Holiday::PesachEighthDiaspora);
            }

            // 27 Nisan, pulled to Thursday before a Friday and (since 5757)
            // pushed past a Sunday.
            let nominal = reference(year, 1, 27);
            if nominal.weekday() == Weekday::Friday {
                if day == 26 {
                    holiday = Some(Holiday::HolocaustDay);
                }
            } else if year >= HOLOCAUST_SUNDAY_RULE_FROM && nominal.weekday() == Weekday::Sunday {
                if day == 28 {
                    holiday = Some(Holiday::HolocaustDay);
                }
            } else if day == 27 {
                holiday = Some(Holiday::HolocaustDay);
            }
        }

        // Iyar
        if month == 2 {
            // 4 Iyar: two days early on Friday, one on Thursday, and (since
            // 5764) one late on Sunday.
            let nominal = reference(year, 2, 4);
            if nominal.weekday() == Weekday::Friday {
                if day == 2 {
                    holiday = Some(Holiday::RemembranceDay);
                }
            } else if nominal.weekday() == Weekday::Thursday {
                if day == 3 {
                    holiday = Some(Holiday::RemembranceDay);
                }
            } else if year >= INDEPENDENCE_SHIFT_RULE_FROM && nominal.weekday() == Weekday::Sunday {
                if day == 5 {
                    holiday = Some(Holiday::RemembranceDay);
                }
            } else if day == 4 {
                holiday = Some(Holiday::RemembranceDay);
            }

            // 5 Iyar: shifts with the remembrance day above.
            let nominal = reference(year, 2, 5);
            if nominal.weekday() == Weekday::Saturday {
                if day == 3 {
                    holiday = Some(Holiday::IndependenceDay);
                }
            } else if nominal.weekday() == Weekday::Friday {
                if day == 4 {
                    holiday = Some(Holiday::IndependenceDay);
                }
            } else if year >= INDEPENDENCE_SHIFT_RULE_FROM && nominal.weekday() == Weekday::Monday {
                if day == 6 {
                    holiday = Some(Holiday::IndependenceDay);
                }
            } else if day == 5 {
                holiday = Some(Holiday::IndependenceDay);
            }

            if day == 14 {
                holiday = Some(Holiday::SecondPesach);
            }
            if day == 18 {
                holiday = Some(Holiday::LagBaomer);
            }
            if day == 28 {
                holiday = Some(Holiday::JerusalemDay);
            }
        }

        // Sivan
        if month == 3 {
            if day == 6 {
                holiday = Some(Holiday::Shavuot);
            }
            if day == 7 && diaspora {
                holiday = Some(Holiday::ShavuotDiaspora);
            }
        }

        // Tamuz: fast postponed off Saturday.
        if month == 4 {
            let nominal = reference(year, 4, 17);
            if nominal.weekday() == Weekday::Saturday {
                if day == 18 {
                    holiday = Some(Holiday::FastOfTamuz);
                }
            } else if day == 17 {
                holiday = Some(Holiday::FastOfTamuz);
            }
        }

        // Av: fast postponed off Saturday.
        if month == 5 {
            let nominal = reference(year, 5, 9);
            if nominal.weekday() == Weekday::Saturday {
                if day == 10 {
                    holiday = Some(Holiday::FastOfAv);
                }
            } else if day == 9 {
                holiday = Some(Holiday::FastOfAv);
            }
            if day == 15 {
                holiday = Some(Holiday::TuBeAv);
            }
        }

        // Tishrei
        if month == 7 {
            if day == 1 {
                holiday = Some(Holiday::RoshHashana);
            }
            if day == 2 {
                holiday = Some(Holiday::RoshHashanaSecond);
            }
            let nominal = reference(year, 7, 3);
            if nominal.weekday() == Weekday::Saturday {
                if day == 4 {
                    holiday = Some(Holiday::FastOfGedaliah);
                }
            } else if day == 3 {
                holiday = Some(Holiday::FastOfGedaliah);
            }
            if day == 10 {
                holiday = Some(Holiday::Kippur);
            }
            if day == 15 {
                holiday = Some(Holiday::Sukkot);
            }
            if day == 16 {
                holiday = Some(if diaspora {
                    Holiday::SukkotDiaspora
                } else {
                    Holiday::CholHamoedSukkot
                });
            }
            if (17..=20).contains(&day) {
                holiday = Some(Holiday::CholHamoedSukkot);
            }
            if day == 21 {
                holiday = Some(Holiday::HoshaanaRabba);
            }
            if day == 22 {
                holiday = Some(if diaspora {
                    Holiday::SheminiAtzeret
                } else {
                    Holiday::SheminiAtzeretSimchatTorah
                });
            }
            if day == 23 && diaspora {
                holiday = Some(Holiday::SimchatTorah);
            }
        }

        // Kislev: Chanukka begins on the 25th.
        if month == 9 {
            match day {
                25 => holiday = Some(Holiday::Chanukka1),
                26 => holiday = Some(Holiday::Chanukka2),
                27 => holiday = Some(Holiday::Chanukka3),
                28 => holiday = Some(Holiday::Chanukka4),
                29 => holiday = Some(Holiday::Chanukka5),
                30 if month_length(year, 9) == 30 => holiday = Some(Holiday::Chanukka6),
                _ => {}
            }
        }

        // Tevet: Chanukka's spill depends on Kislev's length.
        if month == 10 {
            if month_length(year, 9) == 30 {
                if day == 1 {
                    holiday = Some(Holiday::Chanukka7);
                }
                if day == 2 {
                    holiday = Some(Holiday::Chanukka8);
                }
            } else {
                if day == 1 {
                    holiday = Some(Holiday::Chanukka6);
                }
                if day == 2 {
                    holiday = Some(Holiday::Chanukka7);
                }
                if day == 3 {
                    holiday = Some(Holiday::Chanukka8);
                }
            }
            if day == 10 {
                holiday = Some(Holiday::FastOfTevet);
            }
        }

        // Shevat
        if month == 11 && day == 15 {
            holiday = Some(Holiday::TuBiShvat);
        }

        // Purim lives in the last Adar; the fast moves off Saturday (early).
        let esther_month = if is_leap_year(year) { 13 } else { 12 };
        if month == esther_month {
            let nominal = reference(year, esther_month, 13);
            if nominal.weekday() == Weekday::Saturday {
                if day == 11 {
                    holiday = Some(Holiday::FastOfEsther);
                }
            } else if day == 13 {
                holiday = Some(Holiday::FastOfEsther);
            }
            if day == 14 {
                holiday = Some(Holiday::Purim);
            }
            if day == 15 {
                holiday = Some(Holiday::ShushanPurim);
            }
        }
        if is_leap_year(year) && month == 12 {
            if day == 14 {
                holiday = Some(Holiday::PurimKatan);
            }
            if day == 15 {
                holiday = Some(Holiday::ShushanPurimKatan);
            }
        }

        holiday
    }
}

/// A fixed reference date used only for its weekday.
fn reference(year: i32, month: u8, day: u8) -> HebrewDate {
    // Reference days are all <= 27 and in months that always exist for the
    // given year, so construction cannot fail.
    HebrewDate::new(year, month, day).expect("reference date is always valid")
}
