//! Interval-collision layout: greedy interval graph coloring of one day's
//! events into display columns.

use crate::errors::{AppError, AppResult};
use crate::models::{LayoutResult, TimedEvent};
use std::cmp::Ordering;

/// A column that is still blocked by an event running until `occupied_until`.
#[derive(Debug, Clone, Copy)]
struct Occupancy {
    column: usize,
    occupied_until: i32,
}

/// Check every event of the batch. The first malformed one is reported
/// with its input position and id.
pub fn validate(events: &[TimedEvent]) -> AppResult<()> {
    for (index, ev) in events.iter().enumerate() {
        if let Some(reason) = ev.interval_problem() {
            return Err(AppError::invalid_interval(index, &ev.id, reason));
        }
    }
    Ok(())
}

/// Processing order: start, then end (shorter first), then id, then input index.
fn processing_order(a: (usize, &TimedEvent), b: (usize, &TimedEvent)) -> Ordering {
    a.1.start_minute
        .cmp(&b.1.start_minute)
        .then(a.1.end_minute.cmp(&b.1.end_minute))
        .then_with(|| a.1.id.cmp(&b.1.id))
        .then(a.0.cmp(&b.0))
}

fn lowest_free_column(active: &[Occupancy]) -> usize {
    let mut column = 0;
    while active.iter().any(|o| o.column == column) {
        column += 1;
    }
    column
}

/// Assign every event the lowest free column such that events sharing a
/// column never overlap.
///
/// The whole batch is validated before any assignment, so a malformed event
/// never yields a partial result. Results come back in input order and carry
/// the same `column_count`, the peak number of simultaneously running events.
pub fn layout(events: &[TimedEvent]) -> AppResult<Vec<LayoutResult>> {
    validate(events)?;

    if events.is_empty() {
        return Ok(Vec::new());
    }

    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by(|&a, &b| processing_order((a, &events[a]), (b, &events[b])));

    let mut columns = vec![0usize; events.len()];
    let mut active: Vec<Occupancy> = Vec::new();
    let mut max_active = 0;

    for idx in order {
        let ev = &events[idx];

        // Retire columns whose event ended at or before this start
        active.retain(|o| o.occupied_until > ev.start_minute);

        let column = lowest_free_column(&active);
        columns[idx] = column;

        active.push(Occupancy {
            column,
            occupied_until: ev.end_minute,
        });
        max_active = max_active.max(active.len());

        log::trace!(
            "event '{}' [{}, {}) -> column {} ({} active)",
            ev.id,
            ev.start_minute,
            ev.end_minute,
            column,
            active.len()
        );
    }

    let column_count = max_active.max(1);
    log::debug!(
        "laid out {} events into {} columns",
        events.len(),
        column_count
    );

    Ok(events
        .iter()
        .zip(columns)
        .map(|(ev, column)| LayoutResult {
            id: ev.id.clone(),
            column,
            column_count,
        })
        .collect())
}
