use crate::errors::AppResult;
use crate::models::timed_event::TimedEvent;
use crate::utils::time::TimeOfDay;
use serde::{Deserialize, Serialize};

/// Boundary form of an event as found in input files (`"HH:MM"` strings).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    #[serde(default)]
    pub title: String,
    pub start: String, // "HH:MM"
    pub end: String,   // "HH:MM", "24:00" allowed
}

impl EventRecord {
    pub fn new(id: &str, start: &str, end: &str) -> Self {
        Self {
            id: id.to_string(),
            title: String::new(),
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Parse both times once; the engine never sees strings.
    pub fn to_timed_event(&self) -> AppResult<TimedEvent> {
        let start = TimeOfDay::parse(&self.start)?;
        let end = TimeOfDay::parse(&self.end)?;
        Ok(TimedEvent::from_times(self.id.clone(), start, end).with_title(self.title.clone()))
    }
}
