use crate::utils::time::{MINUTES_PER_DAY, TimeOfDay};
use serde::{Deserialize, Serialize};

/// The minimal interval consumed by the layout engine.
///
/// Minutes are signed so that malformed input (negative or past-midnight
/// values) can still be represented and rejected by validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedEvent {
    pub id: String,
    pub start_minute: i32, // minutes since midnight, 0 <= start < 1440
    pub end_minute: i32,   // minutes since midnight, start < end <= 1440
    #[serde(default)]
    pub title: String,
}

impl TimedEvent {
    pub fn new(id: impl Into<String>, start_minute: i32, end_minute: i32) -> Self {
        Self {
            id: id.into(),
            start_minute,
            end_minute,
            title: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Build from two already-parsed times of day.
    pub fn from_times(id: impl Into<String>, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self::new(id, start.minutes() as i32, end.minutes() as i32)
    }

    pub fn duration_minutes(&self) -> i32 {
        self.end_minute - self.start_minute
    }

    /// Half-open overlap test: back-to-back events do not overlap.
    pub fn overlaps(&self, other: &TimedEvent) -> bool {
        self.start_minute < other.end_minute && other.start_minute < self.end_minute
    }

    /// Describe why this interval is malformed, or `None` if it is valid.
    pub fn interval_problem(&self) -> Option<String> {
        let day = MINUTES_PER_DAY as i32;

        if self.start_minute < 0 || self.start_minute >= day {
            return Some(format!(
                "start minute {} outside [0, {})",
                self.start_minute, day
            ));
        }
        if self.end_minute < 0 || self.end_minute > day {
            return Some(format!("end minute {} outside [0, {}]", self.end_minute, day));
        }
        if self.start_minute >= self.end_minute {
            return Some(format!(
                "start minute {} is not before end minute {}",
                self.start_minute, self.end_minute
            ));
        }
        None
    }
}
