pub mod check;
pub mod config;
pub mod init;
pub mod layout;
pub mod render;
pub mod stats;

use crate::cli::parser::{OutputArgs, PrepareArgs};
use crate::config::Config;
use crate::core::logic::PrepareOptions;
use crate::errors::{AppError, AppResult};
use crate::export::OutputFormat;
use crate::ui::messages::warning;

/// CLI flags win over config values.
pub(crate) fn prepare_options(cfg: &Config, args: &PrepareArgs) -> PrepareOptions {
    PrepareOptions {
        min_display_minutes: args.min_duration.unwrap_or(cfg.min_display_minutes),
        skip_invalid: args.skip_invalid || cfg.skip_invalid,
    }
}

pub(crate) fn output_format(cfg: &Config, args: &OutputArgs) -> AppResult<OutputFormat> {
    match args.format {
        Some(f) => Ok(f),
        None => OutputFormat::from_config(&cfg.default_format),
    }
}

pub(crate) fn report_skipped(skipped: &[AppError]) {
    for e in skipped {
        warning(format!("Skipped: {}", e));
    }
}
