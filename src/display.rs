use anyhow::{Context, Result};

use luach_civil::{CivilDate, CivilDateTime};
use luach_hebrew::{epoch, HebrewDate};
use luach_names::{civil_month_name, month_name, Locale};
use luach_numerals::hebrew_numeral;

/// Formats a Hebrew date in `locale`: numerals and month name in Hebrew,
/// plain digits in English.
pub fn hebrew_date(date: HebrewDate, locale: Locale) -> Result<String> {
    let leap = epoch::is_leap_year(date.year());
    let month = month_name(date.month(), leap, locale)
        .with_context(|| format!("month {} has no display name", date.month()))?;
    Ok(match locale {
        Locale::Hebrew => {
            let day = hebrew_numeral(u16::from(date.day()), true)?;
            let year = u16::try_from(date.year())
                .ok()
                .and_then(|y| hebrew_numeral(y, true).ok())
                .with_context(|| format!("year {} has no numeral form", date.year()))?;
            format!("{day} {month} {year}")
        }
        Locale::English => format!("{} {} {}", date.day(), month, date.year()),
    })
}

/// Formats a civil date as "3 October 2024".
pub fn civil_date(date: CivilDate) -> String {
    let month = civil_month_name(date.month()).unwrap_or("?");
    format!("{} {} {}", date.day(), month, date.year())
}

/// Formats a local unix instant as a wall clock, HH:MM:SS.
pub fn clock(local_unix: i64) -> String {
    let t = CivilDateTime::from_unix_seconds(local_unix).time();
    format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_both_locales() {
        let date = HebrewDate::new(5784, 7, 1).unwrap();
        assert_eq!(
            hebrew_date(date, Locale::Hebrew).unwrap(),
            "א׳ תשרי ה׳תשפ״ד"
        );
        assert_eq!(
            hebrew_date(date, Locale::English).unwrap(),
            "1 Tishrei 5784"
        );
    }

    #[test]
    fn leap_month_names_resolve() {
        // Adar II of a leap year.
        let date = HebrewDate::new(5784, 13, 14).unwrap();
        assert!(hebrew_date(date, Locale::English).unwrap().contains("5784"));
    }

    #[test]
    fn civil_date_reads_naturally() {
        let date = CivilDate::new(2024, 10, 3).unwrap();
        assert_eq!(civil_date(date), "3 October 2024");
    }

    #[test]
    fn clock_wraps_midnight() {
        assert_eq!(clock(0), "00:00:00");
        assert_eq!(clock(6 * 3600 + 35 * 60 + 7), "06:35:07");
    }
}
