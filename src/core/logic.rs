use crate::core::geometry::{self, GeometryOptions};
use crate::core::layout;
use crate::errors::{AppError, AppResult};
use crate::models::{Block, EventRecord, LayoutResult, TimedEvent};
use crate::utils::time::MINUTES_PER_DAY;

/// How raw records are turned into engine input.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrepareOptions {
    /// Short events are stretched to at least this many minutes (0 = off).
    pub min_display_minutes: u32,
    /// Drop malformed events with a warning instead of failing the batch.
    pub skip_invalid: bool,
}

#[derive(Debug, Default)]
pub struct Prepared {
    pub events: Vec<TimedEvent>,
    pub skipped: Vec<AppError>,
}

#[derive(Debug, Default)]
pub struct DayLayout {
    pub events: Vec<TimedEvent>,
    pub results: Vec<LayoutResult>,
    pub skipped: Vec<AppError>,
}

pub struct Core;

impl Core {
    /// Parse a single record and check its interval.
    fn convert(index: usize, rec: &EventRecord) -> AppResult<TimedEvent> {
        let ev = rec.to_timed_event().map_err(|e| match e {
            AppError::InvalidTime(t) => {
                AppError::invalid_interval(index, &rec.id, format!("invalid time '{}'", t))
            }
            other => other,
        })?;

        match ev.interval_problem() {
            Some(reason) => Err(AppError::invalid_interval(index, &ev.id, reason)),
            None => Ok(ev),
        }
    }

    fn stretch(ev: &mut TimedEvent, min_minutes: u32) {
        let min = min_minutes.min(MINUTES_PER_DAY) as i32;
        if ev.duration_minutes() < min {
            ev.end_minute = (ev.start_minute + min).min(MINUTES_PER_DAY as i32);
        }
    }

    /// Every problem found in the records, in input order.
    pub fn validate_records(records: &[EventRecord]) -> Vec<AppError> {
        records
            .iter()
            .enumerate()
            .filter_map(|(i, rec)| Self::convert(i, rec).err())
            .collect()
    }

    pub fn prepare(records: &[EventRecord], opts: &PrepareOptions) -> AppResult<Prepared> {
        let mut prepared = Prepared::default();

        for (i, rec) in records.iter().enumerate() {
            match Self::convert(i, rec) {
                Ok(mut ev) => {
                    if opts.min_display_minutes > 0 {
                        Self::stretch(&mut ev, opts.min_display_minutes);
                    }
                    prepared.events.push(ev);
                }
                Err(e) if opts.skip_invalid => {
                    log::warn!("skipping event: {}", e);
                    prepared.skipped.push(e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(prepared)
    }

    pub fn layout_day(records: &[EventRecord], opts: &PrepareOptions) -> AppResult<DayLayout> {
        let Prepared { events, skipped } = Self::prepare(records, opts)?;
        let results = layout::layout(&events)?;

        Ok(DayLayout {
            events,
            results,
            skipped,
        })
    }

    pub fn render_day(
        records: &[EventRecord],
        opts: &PrepareOptions,
        geometry_opts: &GeometryOptions,
    ) -> AppResult<(Vec<Block>, Vec<AppError>)> {
        let day = Self::layout_day(records, opts)?;
        let blocks = geometry::blocks(&day.events, &day.results, geometry_opts)?;
        Ok((blocks, day.skipped))
    }
}
