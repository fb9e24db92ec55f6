use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};

/// Handle the `init` command: write a default config file.
/// An existing file is left untouched.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::resolve_path(cli.config.as_deref());

    if path.exists() {
        warning(format!(
            "Config file already exists: {} (left unchanged)",
            path.display()
        ));
        return Ok(());
    }

    info(format!("Initializing rDayLayout config at {}", path.display()));
    Config::init_all(&path, cli.test)?;
    log::info!("config initialized at {}", path.display());
    Ok(())
}
