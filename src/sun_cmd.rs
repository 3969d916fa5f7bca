use anyhow::Result;
use tracing::info;

use luach_civil::{CivilDate, CivilDateTime, TimeOfDay};
use luach_solar::{proportional_time, sun};

use crate::cli::SunArgs;
use crate::config::LuachConfig;
use crate::display;
use crate::parse;

/// Sunrise, sunset, and optionally the proportional hour of an instant.
pub fn run(args: &SunArgs) -> Result<()> {
    let config = LuachConfig::load(&args.config)?;
    let locale = config.locale()?;
    let observer = config.observer()?;
    let offset = config.utc_offset_seconds();

    let (year, month, day) = parse::date_triple(&args.date)?;
    let date = CivilDate::new(year, month, day)?;
    let midnight_utc =
        CivilDateTime::new(date, TimeOfDay::MIDNIGHT).to_unix_seconds() - i64::from(offset);

    let rise = sun::sunrise(observer, midnight_utc)?;
    let set = sun::sunset(observer, midnight_utc)?;
    info!(
        latitude = observer.latitude(),
        longitude = observer.longitude(),
        rise,
        set,
        "computed sun times"
    );

    println!("Date:    {}", display::civil_date(date));
    println!("Sunrise: {}", display::clock(rise + i64::from(offset)));
    println!("Sunset:  {}", display::clock(set + i64::from(offset)));

    if let Some(time) = &args.time {
        let (hour, minute, second) = parse::time_triple(time)?;
        let instant = CivilDateTime::new(date, TimeOfDay::new(hour, minute, second)?)
            .to_unix_seconds()
            - i64::from(offset);
        let t = proportional_time(observer, instant, offset)?;
        println!(
            "Proportional hour: {} of {} ({:.0}% elapsed)",
            t.hour(),
            display::hebrew_date(t.date(), locale)?,
            t.fraction() * 100.0
        );
    }
    Ok(())
}
