use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::import::load_records;
use crate::ui::messages::{error, success};

/// Handle the `check` command: list every malformed event.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Check { file } = cmd {
        let records = load_records(file)?;
        let problems = Core::validate_records(&records);

        if problems.is_empty() {
            success(format!("{} events, all valid", records.len()));
            return Ok(());
        }

        for p in &problems {
            error(p);
        }
        return Err(AppError::ValidationFailed(problems.len()));
    }
    Ok(())
}
