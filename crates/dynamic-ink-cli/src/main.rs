//! `dynamic-ink` command-line tool.
//!
//! Loads a theme-color declaration (or the built-in theme), processes it and
//! prints the resulting color maps as JSON or YAML.

mod cli;
mod logging;
mod output;

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    if let Err(err) = logging::setup(cli.verbose) {
        eprintln!("warning: failed to set up logging: {:#}", err);
    }

    match cli::run(&cli) {
        Ok(rendered) => {
            print!("{}", rendered);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
