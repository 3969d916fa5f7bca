mod cli;
mod config;
mod convert_cmd;
mod display;
mod holidays_cmd;
mod logging;
mod parse;
mod reading_cmd;
mod sun_cmd;
mod year_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Convert(args) => convert_cmd::run(&args),
        Command::Year(args) => year_cmd::run(&args),
        Command::Holidays(args) => holidays_cmd::run(&args),
        Command::Reading(args) => reading_cmd::run(&args),
        Command::Sun(args) => sun_cmd::run(&args),
    }
}
