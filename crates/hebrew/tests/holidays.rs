use luach_hebrew::{HebrewDate, Holiday, Weekday};

fn date(y: i32, m: u8, d: u8) -> HebrewDate {
    HebrewDate::new(y, m, d).unwrap()
}

#[test]
fn pesach_week_israel_and_diaspora() {
    // 15 Nisan 5783 falls on a Thursday.
    assert_eq!(date(5783, 1, 15).weekday(), Weekday::Thursday);
    assert_eq!(date(5783, 1, 15).holiday(false), Some(Holiday::Pesach));
    assert_eq!(date(5783, 1, 15).holiday(true), Some(Holiday::Pesach));
    assert_eq!(
        date(5783, 1, 16).holiday(false),
        Some(Holiday::CholHamoedPesach)
    );
    assert_eq!(
        date(5783, 1, 16).holiday(true),
        Some(Holiday::PesachDiaspora)
    );
    for d in 17..=20 {
        assert_eq!(
            date(5783, 1, d).holiday(false),
            Some(Holiday::CholHamoedPesach),
            "day {d}"
        );
    }
    assert_eq!(
        date(5783, 1, 21).holiday(false),
        Some(Holiday::PesachSeventh)
    );
    assert_eq!(date(5783, 1, 22).holiday(false), None);
    assert_eq!(
        date(5783, 1, 22).holiday(true),
        Some(Holiday::PesachEighthDiaspora)
    );
}

#[test]
fn sukkot_week_israel_and_diaspora() {
    assert_eq!(date(5784, 7, 15).holiday(false), Some(Holiday::Sukkot));
    assert_eq!(
        date(5784, 7, 16).holiday(false),
        Some(Holiday::CholHamoedSukkot)
    );
    assert_eq!(
        date(5784, 7, 16).holiday(true),
        Some(Holiday::SukkotDiaspora)
    );
    assert_eq!(
        date(5784, 7, 21).holiday(false),
        Some(Holiday::HoshaanaRabba)
    );
    assert_eq!(
        date(5784, 7, 22).holiday(false),
        Some(Holiday::SheminiAtzeretSimchatTorah)
    );
    assert_eq!(
        date(5784, 7, 22).holiday(true),
        Some(Holiday::SheminiAtzeret)
    );
    assert_eq!(date(5784, 7, 23).holiday(false), None);
    assert_eq!(date(5784, 7, 23).holiday(true), Some(Holiday::SimchatTorah));
}

#[test]
fn shavuot_second_day_diaspora_only() {
    assert_eq!(date(5782, 3, 6).holiday(false), Some(Holiday::Shavuot));
    assert_eq!(date(5782, 3, 7).holiday(false), None);
    assert_eq!(
        date(5782, 3, 7).holiday(true),
        Some(Holiday::ShavuotDiaspora)
    );
}

#[test]
fn holocaust_day_shifts() {
    // 27 Nisan 5784 is a Sunday: observed the day after.
    assert_eq!(date(5784, 1, 27).weekday(), Weekday::Sunday);
    assert_eq!(date(5784, 1, 27).holiday(false), None);
    assert_eq!(date(5784, 1, 28).holiday(false), Some(Holiday::HolocaustDay));
    // 27 Nisan 5785 is a Friday: observed the day before.
    assert_eq!(date(5785, 1, 27).weekday(), Weekday::Friday);
    assert_eq!(date(5785, 1, 26).holiday(false), Some(Holiday::HolocaustDay));
    assert_eq!(date(5785, 1, 27).holiday(false), None);
    // 27 Nisan 5783 is a Tuesday: observed on the nominal day.
    assert_eq!(date(5783, 1, 27).weekday(), Weekday::Tuesday);
    assert_eq!(date(5783, 1, 27).holiday(false), Some(Holiday::HolocaustDay));
}

#[test]
fn independence_day_shifts() {
    // In 5784, 4 Iyar is a Sunday and 5 Iyar a Monday: both observances
    // push one day later.
    assert_eq!(date(5784, 2, 4).weekday(), Weekday::Sunday);
    assert_eq!(date(5784, 2, 5).holiday(false), Some(Holiday::RemembranceDay));
    assert_eq!(
        date(5784, 2, 6).holiday(false),
        Some(Holiday::IndependenceDay)
    );
    assert_eq!(date(5784, 2, 4).holiday(false), None);
}

#[test]
fn fasts_postpone_off_saturday() {
    // 9 Av 5779 is a Saturday: the fast moves to the 10th.
    assert_eq!(date(5779, 5, 9).weekday(), Weekday::Saturday);
    assert_eq!(date(5779, 5, 10).holiday(false), Some(Holiday::FastOfAv));
    // 17 Tamuz 5779, two days earlier plus a month, is also a Saturday.
    assert_eq!(date(5779, 4, 17).weekday(), Weekday::Saturday);
    assert_eq!(date(5779, 4, 18).holiday(false), Some(Holiday::FastOfTamuz));
    assert_eq!(date(5779, 4, 17).holiday(false), None);
    // 3 Tishrei 5785 is a Saturday: the Gedaliah fast moves to the 4th.
    assert_eq!(date(5785, 7, 3).weekday(), Weekday::Saturday);
    assert_eq!(
        date(5785, 7, 4).holiday(false),
        Some(Holiday::FastOfGedaliah)
    );
    // The Esther fast moves earlier instead: 13 Adar II 5784 is a Saturday,
    // so the fast lands on the preceding Thursday.
    assert_eq!(date(5784, 13, 13).weekday(), Weekday::Saturday);
    assert_eq!(
        date(5784, 13, 11).holiday(false),
        Some(Holiday::FastOfEsther)
    );
    assert_eq!(date(5784, 13, 13).holiday(false), None);
}

#[test]
fn chanukka_covers_eight_days_in_every_year_shape() {
    for year in [5780, 5781, 5782, 5783, 5784] {
        let start = date(year, 9, 25);
        let mut lights = Vec::new();
        for offset in 0..8 {
            let day = start.plus_days(offset).unwrap();
            lights.push(day.holiday(false));
        }
        assert_eq!(
            lights,
            vec![
                Some(Holiday::Chanukka1),
                Some(Holiday::Chanukka2),
                Some(Holiday::Chanukka3),
                Some(Holiday::Chanukka4),
                Some(Holiday::Chanukka5),
                Some(Holiday::Chanukka6),
                Some(Holiday::Chanukka7),
                Some(Holiday::Chanukka8),
            ],
            "year {year}"
        );
    }
}

#[test]
fn purim_month_depends_on_leap() {
    // Common year: Purim in Adar (month 12).
    assert_eq!(date(5783, 12, 14).holiday(false), Some(Holiday::Purim));
    assert_eq!(date(5783, 12, 15).holiday(false), Some(Holiday::ShushanPurim));
    // Leap year: Purim in Adar II, Purim Katan in Adar I.
    assert_eq!(date(5784, 13, 14).holiday(false), Some(Holiday::Purim));
    assert_eq!(
        date(5784, 13, 15).holiday(false),
        Some(Holiday::ShushanPurim)
    );
    assert_eq!(date(5784, 12, 14).holiday(false), Some(Holiday::PurimKatan));
    assert_eq!(
        date(5784, 12, 15).holiday(false),
        Some(Holiday::ShushanPurimKatan)
    );
}

#[test]
fn fixed_days() {
    assert_eq!(date(5784, 7, 1).holiday(false), Some(Holiday::RoshHashana));
    assert_eq!(
        date(5784, 7, 2).holiday(false),
        Some(Holiday::RoshHashanaSecond)
    );
    assert_eq!(date(5784, 7, 10).holiday(false), Some(Holiday::Kippur));
    assert_eq!(date(5784, 10, 10).holiday(false), Some(Holiday::FastOfTevet));
    assert_eq!(date(5784, 11, 15).holiday(false), Some(Holiday::TuBiShvat));
    assert_eq!(date(5784, 2, 14).holiday(false), Some(Holiday::SecondPesach));
    assert_eq!(date(5784, 2, 18).holiday(false), Some(Holiday::LagBaomer));
    assert_eq!(date(5784, 2, 28).holiday(false), Some(Holiday::JerusalemDay));
    assert_eq!(date(5784, 5, 15).holiday(false), Some(Holiday::TuBeAv));
}

#[test]
fn most_days_are_ordinary() {
    let count = (1..=30)
        .filter(|&d| date(5783, 8, d).holiday(false).is_some())
        .count();
    assert_eq!(count, 0, "Cheshvan has no holidays");
}
