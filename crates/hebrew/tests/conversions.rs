use luach_hebrew::epoch::{month_length, months_in_year, year_length};
use luach_hebrew::{HebrewDate, HebrewError, Weekday};

#[test]
fn roundtrip_every_day_of_two_decades() {
    for year in 5770..=5790 {
        for month in 1..=months_in_year(year) {
            for day in 1..=month_length(year, month) {
                let date = HebrewDate::new(year, month, day).unwrap();
                let back = HebrewDate::from_days_since_epoch(date.days_since_epoch()).unwrap();
                assert_eq!(
                    back, date,
                    "roundtrip failed for {year}-{month}-{day}: got {back:?}"
                );
            }
        }
    }
}

#[test]
fn day_numbers_are_dense_and_monotonic() {
    // Stepping one epoch day at a time walks the calendar without gaps.
    let start = HebrewDate::new(5783, 7, 1).unwrap().days_since_epoch();
    let mut prev = HebrewDate::from_days_since_epoch(start).unwrap();
    for offset in 1..=800 {
        let next = HebrewDate::from_days_since_epoch(start + offset).unwrap();
        assert!(next > prev, "day {offset}: {next:?} not after {prev:?}");
        assert_eq!(next.days_since(prev), 1, "day {offset}");
        prev = next;
    }
}

#[test]
fn known_epoch_days_and_weekdays() {
    let cases: &[(i32, u8, u8, i64, Weekday)] = &[
        (5785, 7, 1, 739162, Weekday::Thursday),
        (5784, 7, 1, 738779, Weekday::Saturday),
        (5784, 1, 15, 738999, Weekday::Tuesday),
        (5783, 1, 15, 738616, Weekday::Thursday),
        (5782, 3, 6, 738311, Weekday::Sunday),
        (5780, 9, 25, 737416, Weekday::Monday),
        (5781, 12, 14, 737847, Weekday::Friday),
        (5784, 13, 14, 738969, Weekday::Sunday),
    ];
    for &(y, m, d, expected_day, expected_weekday) in cases {
        let date = HebrewDate::new(y, m, d).unwrap();
        assert_eq!(
            date.days_since_epoch(),
            expected_day,
            "epoch day of {y}-{m}-{d}"
        );
        assert_eq!(date.weekday(), expected_weekday, "weekday of {y}-{m}-{d}");
    }
}

#[test]
fn conversion_is_pure() {
    let date = HebrewDate::new(5784, 11, 15).unwrap();
    assert_eq!(date.days_since_epoch(), date.days_since_epoch());
    let day = date.days_since_epoch();
    assert_eq!(
        HebrewDate::from_days_since_epoch(day).unwrap(),
        HebrewDate::from_days_since_epoch(day).unwrap()
    );
}

#[test]
fn year_lengths_match_day_number_spans() {
    for year in 5700..5800 {
        let this = HebrewDate::new(year, 7, 1).unwrap();
        let next = HebrewDate::new(year + 1, 7, 1).unwrap();
        assert_eq!(next.days_since(this), year_length(year), "year {year}");
    }
}

#[test]
fn epoch_boundary() {
    let first = HebrewDate::new(1, 7, 1).unwrap();
    let day = first.days_since_epoch();
    assert_eq!(HebrewDate::from_days_since_epoch(day).unwrap(), first);
    assert_eq!(
        HebrewDate::from_days_since_epoch(day - 1).unwrap_err(),
        HebrewError::DayOutOfRange { day: day - 1 }
    );
}

#[test]
fn invalid_fields_are_rejected() {
    assert!(matches!(
        HebrewDate::new(0, 7, 1).unwrap_err(),
        HebrewError::InvalidYear { year: 0 }
    ));
    assert!(matches!(
        HebrewDate::new(5783, 0, 1).unwrap_err(),
        HebrewError::InvalidMonth { month: 0, .. }
    ));
    assert!(matches!(
        HebrewDate::new(5783, 13, 1).unwrap_err(),
        HebrewError::InvalidMonth { month: 13, .. }
    ));
    assert!(matches!(
        HebrewDate::new(5784, 13, 30).unwrap_err(),
        HebrewError::InvalidDay { day: 30, .. }
    ));
}
