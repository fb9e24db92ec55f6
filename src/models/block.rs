use serde::Serialize;

/// Renderable geometry of one laid-out event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Block {
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
