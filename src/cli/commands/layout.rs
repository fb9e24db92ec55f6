use crate::cli::commands::{output_format, prepare_options, report_skipped};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export;
use crate::import::load_records;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Layout {
        file,
        prepare,
        output,
    } = cmd
    {
        let records = load_records(file)?;
        let format = output_format(cfg, output)?;
        let day = Core::layout_day(&records, &prepare_options(cfg, prepare))?;

        report_skipped(&day.skipped);
        export::write_layout(&day, format, output.out.as_deref(), output.force)?;
    }
    Ok(())
}
