use serde::Serialize;

/// Column assignment for one event of a laid-out batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutResult {
    pub id: String,
    pub column: usize,
    pub column_count: usize, // same on every result of the batch
}

impl LayoutResult {
    /// Share of the timeline width taken by one column, in percent.
    pub fn width_pct(&self) -> f64 {
        100.0 / self.column_count.max(1) as f64
    }

    pub fn left_pct(&self) -> f64 {
        self.column as f64 * self.width_pct()
    }
}
