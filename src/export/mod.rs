mod json_csv;
mod model;
mod table;

pub use model::{BlockExport, LayoutExport};

use crate::core::logic::DayLayout;
use crate::errors::{AppError, AppResult};
use crate::models::Block;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    /// Parse the `default_format` config value.
    pub fn from_config(value: &str) -> AppResult<Self> {
        <OutputFormat as ValueEnum>::from_str(value, true)
            .map_err(|_| AppError::Config(format!("unknown output format '{}'", value)))
    }
}

/// Existing files are only replaced with `force`.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::OutputExists(path.display().to_string()));
    }
    Ok(())
}

/// Run `write` against the file at `out`, or stdout when `out` is None.
fn with_output<F>(out: Option<&Path>, force: bool, label: &str, write: F) -> AppResult<()>
where
    F: FnOnce(&mut dyn Write) -> AppResult<()>,
{
    match out {
        Some(path) => {
            ensure_writable(path, force)?;
            let mut file = File::create(path)?;
            write(&mut file)?;
            file.flush()?;
            success(format!("{label} written to {}", path.display()));
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write(&mut lock)?;
            lock.flush()?;
        }
    }
    Ok(())
}

pub fn write_layout(
    day: &DayLayout,
    format: OutputFormat,
    out: Option<&Path>,
    force: bool,
) -> AppResult<()> {
    let rows = model::layout_rows(&day.events, &day.results)?;
    with_output(out, force, "Layout", |w| match format {
        OutputFormat::Table => table::write_layout_table(w, &rows),
        OutputFormat::Json => json_csv::write_json(w, &rows),
        OutputFormat::Csv => json_csv::write_csv(w, &rows),
    })
}

pub fn write_blocks(
    blocks: &[Block],
    format: OutputFormat,
    out: Option<&Path>,
    force: bool,
) -> AppResult<()> {
    let rows: Vec<BlockExport> = blocks.iter().map(BlockExport::from).collect();
    with_output(out, force, "Geometry", |w| match format {
        OutputFormat::Table => table::write_block_table(w, &rows),
        OutputFormat::Json => json_csv::write_json(w, &rows),
        OutputFormat::Csv => json_csv::write_csv(w, &rows),
    })
}
