use anyhow::Result;
use tracing::info;

use luach_civil::CivilDate;
use luach_hebrew::HebrewDate;
use luach_names::{holiday_name, weekday_name};

use crate::cli::ConvertArgs;
use crate::config::LuachConfig;
use crate::display;
use crate::parse;

/// Convert a date between the two calendars through the shared day number.
pub fn run(args: &ConvertArgs) -> Result<()> {
    let config = LuachConfig::load(&args.config)?;
    let locale = config.locale()?;
    let (year, month, day) = parse::date_triple(&args.date)?;

    let (hebrew, civil) = if args.hebrew {
        let hebrew = HebrewDate::new(year, month, day)?;
        let civil = CivilDate::from_days_since_epoch(hebrew.days_since_epoch())?;
        (hebrew, civil)
    } else {
        let civil = CivilDate::new(year, month, day)?;
        let hebrew = HebrewDate::from_days_since_epoch(civil.days_since_epoch())?;
        (hebrew, civil)
    };
    info!(
        day_number = hebrew.days_since_epoch(),
        "resolved shared day number"
    );

    println!("Civil:   {}", display::civil_date(civil));
    println!(
        "Hebrew:  {} ({})",
        display::hebrew_date(hebrew, locale)?,
        weekday_name(hebrew.weekday(), locale)
    );
    if let Some(holiday) = hebrew.holiday(config.diaspora) {
        println!("Holiday: {}", holiday_name(holiday, locale));
    }
    Ok(())
}
