//! Argument parsing and command dispatch.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use dynamic_ink::{
    detect_color_mode, flatten, load_declaration, load_or_default, process_modes, ColorMode,
};
use tracing::info;

use crate::output::{render, render_lines, OutputFormat};

/// Flatten nested theme colors into per-mode color maps
#[derive(Debug, Parser)]
#[command(name = "dynamic-ink")]
#[command(version)]
#[command(about = "Flatten nested theme colors into per-mode color maps")]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Split a declaration into default, dark and light color maps
    Process {
        #[command(flatten)]
        source: Source,

        /// Print all modes, or the resolved palette of a single mode
        #[arg(long, value_enum, default_value_t = ModeChoice::All)]
        mode: ModeChoice,
    },

    /// Flatten a declaration without mode handling
    Flatten {
        /// Declaration file (.yaml, .yml or .json)
        path: PathBuf,
    },

    /// List every color key used by any mode
    Keys {
        #[command(flatten)]
        source: Source,
    },
}

#[derive(Debug, Args)]
pub struct Source {
    /// Declaration file (.yaml, .yml or .json); the built-in theme is used when omitted
    #[arg(env = "DYNAMIC_INK_THEME")]
    pub path: Option<PathBuf>,
}

/// Which part of the processed result to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeChoice {
    /// All three mode buckets
    All,
    /// The default colors
    Default,
    /// Default colors with dark overrides applied
    Dark,
    /// Default colors with light overrides applied
    Light,
    /// Dark or light, following the OS preference
    Auto,
}

impl ModeChoice {
    fn color_mode(self) -> Option<ColorMode> {
        match self {
            ModeChoice::All => None,
            ModeChoice::Default => Some(ColorMode::Default),
            ModeChoice::Dark => Some(ColorMode::Dark),
            ModeChoice::Light => Some(ColorMode::Light),
            ModeChoice::Auto => Some(detect_color_mode()),
        }
    }
}

/// Runs the parsed command and returns what should be printed.
pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Command::Process { source, mode } => {
            let declaration = load_or_default(source.path.as_ref())?;
            let processed = process_modes(&declaration);
            match mode.color_mode() {
                None => render(&processed, cli.format),
                Some(color_mode) => {
                    info!(mode = %color_mode, "resolving palette");
                    render(&processed.resolve(color_mode), cli.format)
                }
            }
        }
        Command::Flatten { path } => {
            let declaration = load_declaration(path)?;
            render(&flatten(&declaration), cli.format)
        }
        Command::Keys { source } => {
            let declaration = load_or_default(source.path.as_ref())?;
            let processed = process_modes(&declaration);
            Ok(render_lines(processed.all_keys()))
        }
    }
}
