use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Luach Hebrew calendar almanac.
#[derive(Parser)]
#[command(
    name = "luach",
    version,
    about = "Hebrew calendar almanac: conversions, holidays, readings, sun times"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a date between the civil and Hebrew calendars.
    Convert(ConvertArgs),
    /// Summarize a Hebrew year: length, leap status, type sign.
    Year(YearArgs),
    /// List the holidays of a Hebrew year with their civil dates.
    Holidays(HolidaysArgs),
    /// Show the weekly Torah reading for a date's week.
    Reading(ReadingArgs),
    /// Sunrise, sunset, and the proportional hour for the configured observer.
    Sun(SunArgs),
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Date as YEAR-MONTH-DAY (civil unless --hebrew).
    pub date: String,

    /// Treat the date as a Hebrew date (month 1 = Nisan).
    #[arg(long)]
    pub hebrew: bool,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "luach.toml")]
    pub config: PathBuf,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Hebrew year number.
    pub year: u16,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "luach.toml")]
    pub config: PathBuf,
}

/// Arguments for the `holidays` subcommand.
#[derive(clap::Args)]
pub struct HolidaysArgs {
    /// Hebrew year number.
    pub year: u16,

    /// Use the diaspora calendar regardless of config.
    #[arg(long)]
    pub diaspora: bool,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "luach.toml")]
    pub config: PathBuf,
}

/// Arguments for the `reading` subcommand.
#[derive(clap::Args)]
pub struct ReadingArgs {
    /// Date as YEAR-MONTH-DAY (civil unless --hebrew).
    pub date: String,

    /// Treat the date as a Hebrew date (month 1 = Nisan).
    #[arg(long)]
    pub hebrew: bool,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "luach.toml")]
    pub config: PathBuf,
}

/// Arguments for the `sun` subcommand.
#[derive(clap::Args)]
pub struct SunArgs {
    /// Civil date as YEAR-MONTH-DAY.
    pub date: String,

    /// Local wall-clock time HH:MM for the proportional-hour readout.
    #[arg(short, long)]
    pub time: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "luach.toml")]
    pub config: PathBuf,
}
