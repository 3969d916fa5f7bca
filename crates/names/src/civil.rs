//! Names for the civil calendar side.

use luach_hebrew::Weekday;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
const MONTH_SHORT_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const WEEKDAY_SHORT_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Full name of a civil month (1 = January), or `None` for an invalid
/// number.
pub fn civil_month_name(month: u8) -> Option<&'static str> {
    MONTH_NAMES.get(usize::from(month).checked_sub(1)?).copied()
}

/// Three-letter name of a civil month.
pub fn civil_month_short_name(month: u8) -> Option<&'static str> {
    MONTH_SHORT_NAMES
        .get(usize::from(month).checked_sub(1)?)
        .copied()
}

/// Three-letter name of a weekday.
pub fn civil_weekday_short_name(weekday: Weekday) -> &'static str {
    WEEKDAY_SHORT_NAMES[usize::from(weekday.number()) - 1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names() {
        assert_eq!(civil_month_name(1), Some("January"));
        assert_eq!(civil_month_name(12), Some("December"));
        assert_eq!(civil_month_name(0), None);
        assert_eq!(civil_month_name(13), None);
        assert_eq!(civil_month_short_name(9), Some("Sep"));
    }

    #[test]
    fn weekday_short_names() {
        assert_eq!(civil_weekday_short_name(Weekday::Sunday), "Sun");
        assert_eq!(civil_weekday_short_name(Weekday::Saturday), "Sat");
    }
}
