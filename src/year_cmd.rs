use anyhow::Result;
use tracing::info;

use luach_civil::CivilDate;
use luach_hebrew::{epoch, HebrewDate, YearType};
use luach_names::{weekday_name, year_type_sign, Locale};
use luach_numerals::hebrew_numeral;

use crate::cli::YearArgs;
use crate::config::LuachConfig;
use crate::display;

/// Summarize one Hebrew year.
pub fn run(args: &YearArgs) -> Result<()> {
    let config = LuachConfig::load(&args.config)?;
    let locale = config.locale()?;
    let year = i32::from(args.year);

    let year_type = YearType::classify(year)?;
    let length = epoch::year_length(year);
    let leap = epoch::is_leap_year(year);
    let rosh_hashana = HebrewDate::new(year, 7, 1)?;
    let civil = CivilDate::from_days_since_epoch(rosh_hashana.days_since_epoch())?;
    info!(year, length, leap, "classified year");

    match locale {
        Locale::Hebrew => println!("Year:         {}", hebrew_numeral(args.year, true)?),
        Locale::English => println!("Year:         {}", args.year),
    }
    println!(
        "Length:       {length} days{}",
        if leap { " (leap)" } else { "" }
    );
    println!("Sign:         {}", year_type_sign(year_type, locale));
    println!(
        "Rosh Hashana: {} ({})",
        display::civil_date(civil),
        weekday_name(rosh_hashana.weekday(), locale)
    );
    Ok(())
}
