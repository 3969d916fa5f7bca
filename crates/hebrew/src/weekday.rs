//! Weekday numbering shared by the calendar and its collaborators.

/// Day of the week, numbered 1 (Sunday) through 7 (Saturday) to match the
/// day-number congruence `epoch_day % 7 + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 1,
    Monday = 2,
    Tuesday = 3,
    Wednesday = 4,
    Thursday = 5,
    Friday = 6,
    Saturday = 7,
}

impl Weekday {
    /// Weekday of an epoch day number.
    pub fn from_epoch_day(day: i64) -> Self {
        match day.rem_euclid(7) {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }

    /// Weekday number 1..=7 (1 = Sunday).
    pub fn number(self) -> u8 {
        self as u8
    }
}
