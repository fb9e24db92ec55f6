use crate::cli::commands::{output_format, prepare_options, report_skipped};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::geometry::GeometryOptions;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export;
use crate::import::load_records;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Render {
        file,
        px_per_hour,
        prepare,
        output,
    } = cmd
    {
        let records = load_records(file)?;
        let format = output_format(cfg, output)?;
        let geometry = GeometryOptions {
            pixels_per_hour: px_per_hour.unwrap_or(cfg.pixels_per_hour),
        };

        let (blocks, skipped) =
            Core::render_day(&records, &prepare_options(cfg, prepare), &geometry)?;

        report_skipped(&skipped);
        export::write_blocks(&blocks, format, output.out.as_deref(), output.force)?;
    }
    Ok(())
}
