//! rDayLayout library root.
//! Exposes the layout engine, its supporting modules and the CLI run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod import;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::layout::layout;
pub use errors::{AppError, AppResult};
pub use models::{LayoutResult, TimedEvent};

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Layout { .. } => cli::commands::layout::handle(&cli.command, cfg),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command),
        Commands::Render { .. } => cli::commands::render::handle(&cli.command, cfg),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    crate::core::bootstrap::init(cli.verbose);

    // Config is loaded once; --config overrides the default location
    let path = Config::resolve_path(cli.config.as_deref());
    let cfg = Config::load(&path)?;

    dispatch(&cli, &cfg)
}
