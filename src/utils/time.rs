//! Time utilities: parsing HH:MM into minutes since midnight, formatting minutes, etc.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Minutes in one calendar day. Also the largest valid end minute.
pub const MINUTES_PER_DAY: u32 = 1440;

/// A time of day stored as minutes since midnight, `0..=1440`.
///
/// `1440` only exists as an end-of-day marker and is written as `"24:00"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);
    pub const END_OF_DAY: TimeOfDay = TimeOfDay(MINUTES_PER_DAY);

    pub fn from_minutes(minutes: u32) -> AppResult<Self> {
        if minutes > MINUTES_PER_DAY {
            return Err(AppError::InvalidTime(format!(
                "{minutes} minutes is past the end of the day"
            )));
        }
        Ok(TimeOfDay(minutes))
    }

    /// Parse `"HH:MM"`. `"24:00"` is accepted as the end of the day.
    pub fn parse(s: &str) -> AppResult<Self> {
        let trimmed = s.trim();
        if trimmed == "24:00" {
            return Ok(Self::END_OF_DAY);
        }

        let t = parse_time(trimmed).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(TimeOfDay(t.hour() * 60 + t.minute()))
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn hour(self) -> u32 {
        self.0 / 60
    }

    pub fn minute(self) -> u32 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TimeOfDay::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        TimeOfDay::parse(&s).map_err(serde::de::Error::custom)
    }
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Render a signed minute count as `HH:MM` (e.g. `-01:30`).
pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}

/// Render a minute-of-day as `HH:MM`, falling back to the raw number when
/// it is outside the day.
pub fn minute_label(minute: i64) -> String {
    match u32::try_from(minute).ok().map(TimeOfDay::from_minutes) {
        Some(Ok(t)) => t.to_string(),
        _ => minute.to_string(),
    }
}
