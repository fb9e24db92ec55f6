//! Pixel/percent geometry for a vertical day timeline.

use crate::errors::{AppError, AppResult};
use crate::models::{Block, LayoutResult, TimedEvent};
use crate::utils::time::minute_label;

#[derive(Debug, Clone, Copy)]
pub struct GeometryOptions {
    pub pixels_per_hour: f64,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            pixels_per_hour: 60.0,
        }
    }
}

impl GeometryOptions {
    /// Height of the full 24h timeline.
    pub fn day_height(&self) -> f64 {
        24.0 * self.pixels_per_hour
    }

    fn minutes_to_px(&self, minutes: i32) -> f64 {
        minutes as f64 / 60.0 * self.pixels_per_hour
    }
}

/// Pair each event with its layout result (same order) and compute its block.
pub fn blocks(
    events: &[TimedEvent],
    results: &[LayoutResult],
    opts: &GeometryOptions,
) -> AppResult<Vec<Block>> {
    if events.len() != results.len() {
        return Err(AppError::Other(format!(
            "{} events but {} layout results",
            events.len(),
            results.len()
        )));
    }
    if !opts.pixels_per_hour.is_finite() || opts.pixels_per_hour <= 0.0 {
        return Err(AppError::Config(format!(
            "pixels_per_hour must be positive, got {}",
            opts.pixels_per_hour
        )));
    }

    events
        .iter()
        .zip(results)
        .map(|(ev, res)| {
            if ev.id != res.id {
                return Err(AppError::Other(format!(
                    "layout result '{}' does not match event '{}'",
                    res.id, ev.id
                )));
            }
            Ok(Block {
                id: ev.id.clone(),
                title: ev.title.clone(),
                start: minute_label(ev.start_minute as i64),
                end: minute_label(ev.end_minute as i64),
                column: res.column,
                column_count: res.column_count,
                top: opts.minutes_to_px(ev.start_minute),
                height: opts.minutes_to_px(ev.duration_minutes()),
                left_pct: res.left_pct(),
                width_pct: res.width_pct(),
            })
        })
        .collect()
}
