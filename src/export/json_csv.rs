// src/export/json_csv.rs

use crate::errors::AppResult;
use serde::Serialize;
use std::io::Write;

/// JSON pretty-printed, trailing newline included.
pub(crate) fn write_json<T: Serialize>(w: &mut dyn Write, rows: &[T]) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut *w, rows)?;
    writeln!(w)?;
    Ok(())
}

/// CSV with header row derived from the field names.
pub(crate) fn write_csv<T: Serialize>(w: &mut dyn Write, rows: &[T]) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(w);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
