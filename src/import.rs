//! Loading event records from JSON, YAML or CSV input files.

use crate::errors::{AppError, AppResult};
use crate::models::EventRecord;
use crate::utils::path::extension;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
    Csv,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        match extension(path).as_deref() {
            Some("json") => Ok(InputFormat::Json),
            Some("yaml") | Some("yml") => Ok(InputFormat::Yaml),
            Some("csv") => Ok(InputFormat::Csv),
            _ => Err(AppError::UnsupportedInput(path.display().to_string())),
        }
    }
}

/// Either a bare list of events or `{ events: [...] }`.
#[derive(Deserialize)]
#[serde(untagged)]
enum EventFile {
    List(Vec<EventRecord>),
    Wrapped { events: Vec<EventRecord> },
}

impl EventFile {
    fn into_records(self) -> Vec<EventRecord> {
        match self {
            EventFile::List(v) | EventFile::Wrapped { events: v } => v,
        }
    }
}

pub fn parse_records(content: &str, format: InputFormat) -> AppResult<Vec<EventRecord>> {
    let records = match format {
        InputFormat::Json => serde_json::from_str::<EventFile>(content)?.into_records(),
        InputFormat::Yaml => serde_yaml::from_str::<EventFile>(content)?.into_records(),
        InputFormat::Csv => {
            let mut rdr = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(content.as_bytes());
            rdr.deserialize::<EventRecord>()
                .collect::<Result<Vec<_>, _>>()?
        }
    };
    Ok(records)
}

pub fn load_records(path: &Path) -> AppResult<Vec<EventRecord>> {
    let format = InputFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    let records = parse_records(&content, format)?;
    log::info!("loaded {} events from {}", records.len(), path.display());
    Ok(records)
}
