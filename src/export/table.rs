// src/export/table.rs

use crate::errors::AppResult;
use crate::export::{BlockExport, LayoutExport};
use crate::utils::table::Table;
use std::io::Write;

pub(crate) fn write_layout_table(w: &mut dyn Write, rows: &[LayoutExport]) -> AppResult<()> {
    let mut table = Table::with_headers(&["ID", "START", "END", "COLUMN", "TITLE"]);
    for r in rows {
        table.add_row(vec![
            r.id.clone(),
            r.start.clone(),
            r.end.clone(),
            format!("{}/{}", r.column + 1, r.column_count),
            r.title.clone(),
        ]);
    }
    write!(w, "{}", table.render())?;

    if let Some(first) = rows.first() {
        writeln!(w, "\nColumns: {}", first.column_count)?;
    }
    Ok(())
}

pub(crate) fn write_block_table(w: &mut dyn Write, rows: &[BlockExport]) -> AppResult<()> {
    let mut table = Table::with_headers(&["ID", "START", "END", "TOP", "HEIGHT", "LEFT%", "WIDTH%"]);
    for r in rows {
        table.add_row(vec![
            r.id.clone(),
            r.start.clone(),
            r.end.clone(),
            format!("{:.1}", r.top),
            format!("{:.1}", r.height),
            format!("{:.2}", r.left_pct),
            format!("{:.2}", r.width_pct),
        ]);
    }
    write!(w, "{}", table.render())?;
    Ok(())
}
