use luach_civil::{month_length, CivilDate, CivilDateTime, CivilError, TimeOfDay};
use luach_hebrew::HebrewDate;

#[test]
fn roundtrip_every_day_of_a_decade() {
    for year in 2018..=2028 {
        for month in 1..=12u8 {
            for day in 1..=month_length(year, month) {
                let date = CivilDate::new(year, month, day).unwrap();
                let back = CivilDate::from_days_since_epoch(date.days_since_epoch()).unwrap();
                assert_eq!(back, date, "roundtrip failed for {year}-{month}-{day}");
            }
        }
    }
}

#[test]
fn day_numbers_are_dense_except_the_yearly_gap() {
    // 2024 is leap in the prior-years sum but common in the month walk, so
    // exactly one number in the walk (the last of 2024) maps to no date.
    let start = CivilDate::new(2023, 1, 1).unwrap().days_since_epoch();
    let gap = start + 730;
    let mut prev = CivilDate::from_days_since_epoch(start).unwrap();
    for offset in 1..=800 {
        let day = start + offset;
        if day == gap {
            assert_eq!(
                CivilDate::from_days_since_epoch(day).unwrap_err(),
                CivilError::DayOutOfRange { day }
            );
            continue;
        }
        let next = CivilDate::from_days_since_epoch(day).unwrap();
        assert!(next > prev, "day {offset}");
        let step = if day == gap + 1 { 2 } else { 1 };
        assert_eq!(next.days_since(prev), step, "day {offset}");
        prev = next;
    }
}

#[test]
fn gap_day_number_reaches_the_hebrew_calendar() {
    // 30 Kislev 5785 (Chanukka) sits on 2024's skipped number; converting
    // it to a civil date reports the gap instead of panicking.
    let hebrew = HebrewDate::new(5785, 9, 30).unwrap();
    assert_eq!(hebrew.days_since_epoch(), 739251);
    assert_eq!(
        CivilDate::from_days_since_epoch(hebrew.days_since_epoch()).unwrap_err(),
        CivilError::DayOutOfRange { day: 739251 }
    );
}

#[test]
fn shares_day_numbers_with_the_hebrew_calendar() {
    // 1 Tishrei 5784 and September 16, 2023 are the same day.
    let hebrew = HebrewDate::new(5784, 7, 1).unwrap();
    let civil = CivilDate::new(2023, 9, 16).unwrap();
    assert_eq!(hebrew.days_since_epoch(), civil.days_since_epoch());
    assert_eq!(hebrew.weekday(), civil.weekday());

    // Round-trip across the two calendars through the shared day number.
    let back = HebrewDate::from_days_since_epoch(civil.days_since_epoch()).unwrap();
    assert_eq!(back, hebrew);
}

#[test]
fn counter_drift_after_february_of_a_divisible_by_four_year() {
    // 15 Nisan 5784 is April 23, 2024; the civil counter reports one day
    // less than the Hebrew-side number because it treats 2024 as common.
    let hebrew = HebrewDate::new(5784, 1, 15).unwrap();
    let civil = CivilDate::new(2024, 4, 23).unwrap();
    assert_eq!(hebrew.days_since_epoch() - civil.days_since_epoch(), 1);
    // The tabular weekday is unaffected by the drift.
    assert_eq!(civil.weekday(), hebrew.weekday());
}

#[test]
fn rejects_day_zero() {
    assert_eq!(
        CivilDate::from_days_since_epoch(0).unwrap_err(),
        CivilError::DayOutOfRange { day: 0 }
    );
}

#[test]
fn unix_conversion_composes_with_dates() {
    let date = CivilDate::new(2024, 10, 3).unwrap();
    let dt = CivilDateTime::new(date, TimeOfDay::new(6, 30, 0).unwrap());
    let back = CivilDateTime::from_unix_seconds(dt.to_unix_seconds());
    assert_eq!(back.date().year(), 2024);
    assert_eq!(back.date().month(), 10);
    assert_eq!(back.date().day(), 3);
    assert_eq!(back.time().hour(), 6);
    assert_eq!(back.time().minute(), 30);
}
