//! Log entries: one recorded access per line of a web server log.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when a log line cannot be read as a [`LogEntry`].
///
/// Only the shape of the line is checked here. Whether month, day and hour
/// fall inside their calendar domains is decided by the aggregator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseEntryError {
    /// The line ended before the named field.
    #[error("missing {field}")]
    MissingField { field: &'static str },

    /// The named field was not an integer of the expected width.
    #[error("invalid {field}: {value:?}")]
    InvalidNumber {
        field: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Extra tokens followed the minute field.
    #[error("unexpected trailing input: {value:?}")]
    TrailingInput { value: String },
}

/// A single access, as logged: `YYYY MM DD HH MM`.
///
/// Field order matches chronological order, so the derived `Ord` sorts
/// entries by time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LogEntry {
    pub year: i32,
    /// 1–12.
    pub month: u8,
    /// 1–28.
    pub day: u8,
    /// 0–23.
    pub hour: u8,
    /// 0–59. Not used for aggregation.
    #[serde(default)]
    pub minute: u8,
}

impl LogEntry {
    pub const fn new(year: i32, month: u8, day: u8, hour: u8, minute: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
        }
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04} {:02} {:02} {:02} {:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

impl FromStr for LogEntry {
    type Err = ParseEntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let entry = Self {
            year: next_field(&mut parts, "year")?,
            month: next_field(&mut parts, "month")?,
            day: next_field(&mut parts, "day")?,
            hour: next_field(&mut parts, "hour")?,
            minute: next_field(&mut parts, "minute")?,
        };

        if let Some(extra) = parts.next() {
            return Err(ParseEntryError::TrailingInput {
                value: extra.to_string(),
            });
        }
        Ok(entry)
    }
}

fn next_field<'a, T>(
    parts: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> Result<T, ParseEntryError>
where
    T: FromStr<Err = ParseIntError>,
{
    let raw = parts
        .next()
        .ok_or(ParseEntryError::MissingField { field })?;
    raw.parse().map_err(|source| ParseEntryError::InvalidNumber {
        field,
        value: raw.to_string(),
        source,
    })
}
