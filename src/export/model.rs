// src/export/model.rs

use crate::errors::{AppError, AppResult};
use crate::models::{Block, LayoutResult, TimedEvent};
use crate::utils::time::minute_label;
use serde::Serialize;

/// Flat row for layout output.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LayoutExport {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub column: usize,
    pub column_count: usize,
}

/// Flat row for geometry output; numbers rounded to two decimals.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct BlockExport {
    pub id: String,
    pub title: String,
    pub start: String,
    pub end: String,
    pub column: usize,
    pub column_count: usize,
    pub top: f64,
    pub height: f64,
    pub left_pct: f64,
    pub width_pct: f64,
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

impl From<&Block> for BlockExport {
    fn from(b: &Block) -> Self {
        Self {
            id: b.id.clone(),
            title: b.title.clone(),
            start: b.start.clone(),
            end: b.end.clone(),
            column: b.column,
            column_count: b.column_count,
            top: round2(b.top),
            height: round2(b.height),
            left_pct: round2(b.left_pct),
            width_pct: round2(b.width_pct),
        }
    }
}

pub(crate) fn layout_rows(
    events: &[TimedEvent],
    results: &[LayoutResult],
) -> AppResult<Vec<LayoutExport>> {
    if events.len() != results.len() {
        return Err(AppError::Other(format!(
            "{} events but {} layout results",
            events.len(),
            results.len()
        )));
    }

    Ok(events
        .iter()
        .zip(results)
        .map(|(ev, res)| LayoutExport {
            id: ev.id.clone(),
            title: ev.title.clone(),
            start: minute_label(ev.start_minute as i64),
            end: minute_label(ev.end_minute as i64),
            column: res.column,
            column_count: res.column_count,
        })
        .collect())
}
