use anyhow::Result;
use tracing::info;

use luach_civil::CivilDate;
use luach_hebrew::HebrewDate;
use luach_names::holiday_name;

use crate::cli::HolidaysArgs;
use crate::config::LuachConfig;
use crate::display;

/// List every holiday of a Hebrew year in calendar order.
pub fn run(args: &HolidaysArgs) -> Result<()> {
    let config = LuachConfig::load(&args.config)?;
    let locale = config.locale()?;
    let diaspora = args.diaspora || config.diaspora;
    let year = i32::from(args.year);

    // The year runs from one Rosh Hashana to the next.
    let start = HebrewDate::new(year, 7, 1)?.days_since_epoch();
    let end = HebrewDate::new(year + 1, 7, 1)?.days_since_epoch();

    let mut count = 0usize;
    for day_number in start..end {
        let date = HebrewDate::from_days_since_epoch(day_number)?;
        if let Some(holiday) = date.holiday(diaspora) {
            // One number per drifted year has no civil date; keep listing.
            let civil = match CivilDate::from_days_since_epoch(day_number) {
                Ok(c) => display::civil_date(c),
                Err(_) => "(no civil date)".to_string(),
            };
            println!(
                "{}  {}  {}",
                display::hebrew_date(date, locale)?,
                civil,
                holiday_name(holiday, locale)
            );
            count += 1;
        }
    }
    info!(year, diaspora, n_holidays = count, "listed holidays");
    Ok(())
}
