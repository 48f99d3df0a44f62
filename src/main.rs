mod adjust_cmd;
mod cli;
mod config;
mod convert;
mod convert_cmd;
mod logging;
mod output;
mod parse;
mod window_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::UtctimeConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = UtctimeConfig::load(cli.config.as_deref())?;
    let format = convert::resolve_format(cli.format.as_deref(), &config.output)?;
    match cli.command {
        Command::ToEpoch(args) => convert_cmd::to_epoch(args),
        Command::FromEpoch(args) => convert_cmd::from_epoch(args, format),
        Command::Adjust(args) => adjust_cmd::adjust(args, format),
        Command::Diff(args) => adjust_cmd::diff(args),
        Command::Window(args) => window_cmd::run(args, &config.window, format),
    }
}
