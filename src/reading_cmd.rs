use anyhow::Result;
use tracing::info;

use luach_civil::CivilDate;
use luach_hebrew::HebrewDate;
use luach_names::parasha_name;

use crate::cli::ReadingArgs;
use crate::config::LuachConfig;
use crate::display;
use crate::parse;

/// Show the Torah portion read on the Shabbat of a date's week.
pub fn run(args: &ReadingArgs) -> Result<()> {
    let config = LuachConfig::load(&args.config)?;
    let locale = config.locale()?;
    let (year, month, day) = parse::date_triple(&args.date)?;

    let hebrew = if args.hebrew {
        HebrewDate::new(year, month, day)?
    } else {
        let civil = CivilDate::new(year, month, day)?;
        HebrewDate::from_days_since_epoch(civil.days_since_epoch())?
    };

    let reading = hebrew.weekly_reading()?;
    info!(
        date = %format!("{}-{}-{}", hebrew.year(), hebrew.month(), hebrew.day()),
        doubled = reading.is_doubled(),
        "resolved weekly reading"
    );

    println!("Week of: {}", display::hebrew_date(hebrew, locale)?);
    match (reading.first, reading.second) {
        (Some(first), Some(second)) => println!(
            "Parasha: {}-{}",
            parasha_name(first, locale),
            parasha_name(second, locale)
        ),
        (Some(first), None) => println!("Parasha: {}", parasha_name(first, locale)),
        _ => println!("Parasha: none (festival week)"),
    }
    Ok(())
}
