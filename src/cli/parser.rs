use crate::export::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rDayLayout
/// Lays out overlapping appointments of one day into timeline columns
#[derive(Parser)]
#[command(
    name = "rdaylayout",
    version = env!("CARGO_PKG_VERSION"),
    about = "Assign overlapping events of one day to non-overlapping timeline columns",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// How input records are prepared before layout.
#[derive(Args, Debug, Clone, Default)]
pub struct PrepareArgs {
    /// Drop malformed events with a warning instead of failing
    #[arg(long = "skip-invalid")]
    pub skip_invalid: bool,

    /// Minimum displayed duration in minutes (overrides config; 0 disables)
    #[arg(long = "min-duration", value_parser = clap::value_parser!(u32).range(0..=1440))]
    pub min_duration: Option<u32>,
}

/// Where and how results are written.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format (default from config)
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Write to this file instead of stdout
    #[arg(long = "out")]
    pub out: Option<PathBuf>,

    /// Overwrite the output file if it exists
    #[arg(long = "force")]
    pub force: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default configuration file
    Init,

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Assign each event a display column
    Layout {
        /// Events file (.json, .yaml, .yml or .csv)
        file: PathBuf,

        #[command(flatten)]
        prepare: PrepareArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Validate an events file without laying it out
    Check {
        /// Events file (.json, .yaml, .yml or .csv)
        file: PathBuf,
    },

    /// Compute block geometry (top, height, left%, width%) for each event
    Render {
        /// Events file (.json, .yaml, .yml or .csv)
        file: PathBuf,

        /// Timeline scale in pixels per hour (overrides config)
        #[arg(long = "px-per-hour")]
        px_per_hour: Option<f64>,

        #[command(flatten)]
        prepare: PrepareArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show peak concurrency of an events file
    Stats {
        /// Events file (.json, .yaml, .yml or .csv)
        file: PathBuf,
    },
}
