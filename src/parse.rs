use anyhow::{bail, Context, Result};

/// Parses a `YEAR-MONTH-DAY` argument into numeric fields.
pub fn date_triple(text: &str) -> Result<(i32, u8, u8)> {
    let parts: Vec<&str> = text.split('-').collect();
    if parts.len() != 3 {
        bail!("invalid date {text:?}: expected YEAR-MONTH-DAY");
    }
    let year = parts[0]
        .parse::<i32>()
        .with_context(|| format!("invalid year in {text:?}"))?;
    let month = parts[1]
        .parse::<u8>()
        .with_context(|| format!("invalid month in {text:?}"))?;
    let day = parts[2]
        .parse::<u8>()
        .with_context(|| format!("invalid day in {text:?}"))?;
    Ok((year, month, day))
}

/// Parses an `HH:MM` or `HH:MM:SS` argument.
pub fn time_triple(text: &str) -> Result<(u8, u8, u8)> {
    let parts: Vec<&str> = text.split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        bail!("invalid time {text:?}: expected HH:MM or HH:MM:SS");
    }
    let hour = parts[0]
        .parse::<u8>()
        .with_context(|| format!("invalid hour in {text:?}"))?;
    let minute = parts[1]
        .parse::<u8>()
        .with_context(|| format!("invalid minute in {text:?}"))?;
    let second = if parts.len() == 3 {
        parts[2]
            .parse::<u8>()
            .with_context(|| format!("invalid second in {text:?}"))?
    } else {
        0
    };
    Ok((hour, minute, second))
}
