//! Sweep-line concurrency analysis.
//!
//! Independent of the column assignment in `layout`, so it doubles as a
//! reference for how many columns a batch really needs.

use crate::models::TimedEvent;
use serde::Serialize;

/// Peak concurrency and the time windows where it is reached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConcurrencyProfile {
    pub peak: usize,
    /// Half-open `[start, end)` minute ranges where `peak` events run at once.
    pub windows: Vec<(i32, i32)>,
}

/// Intervals are half-open: events with `start >= end` never count.
pub fn concurrency_profile(events: &[TimedEvent]) -> ConcurrencyProfile {
    // (minute, delta) with ends (-1) before starts (+1) at the same minute
    let mut boundaries: Vec<(i32, i32)> = events
        .iter()
        .filter(|e| e.start_minute < e.end_minute)
        .flat_map(|e| [(e.start_minute, 1), (e.end_minute, -1)])
        .collect();
    boundaries.sort();

    // Segments of constant concurrency: (from, to, count)
    let mut segments: Vec<(i32, i32, usize)> = Vec::new();
    let mut running: i32 = 0;
    let mut i = 0;

    while i < boundaries.len() {
        let minute = boundaries[i].0;
        while i < boundaries.len() && boundaries[i].0 == minute {
            running += boundaries[i].1;
            i += 1;
        }
        if let Some(&(next, _)) = boundaries.get(i)
            && running > 0
        {
            segments.push((minute, next, running as usize));
        }
    }

    let peak = segments.iter().map(|s| s.2).max().unwrap_or(0);

    let mut windows: Vec<(i32, i32)> = Vec::new();
    for &(from, to, count) in &segments {
        if count != peak {
            continue;
        }
        match windows.last_mut() {
            Some(last) if last.1 == from => last.1 = to,
            _ => windows.push((from, to)),
        }
    }

    ConcurrencyProfile { peak, windows }
}

/// Maximum number of events running at the same instant.
pub fn max_concurrency(events: &[TimedEvent]) -> usize {
    concurrency_profile(events).peak
}
