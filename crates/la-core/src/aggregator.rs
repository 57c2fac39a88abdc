//! Access count aggregation.
//!
//! An [`Aggregator`] owns three fixed-size counters (hour of day, day of month,
//! month of year) and fills them from a stream of [`LogEntry`] values.
//!
//! # Passes are not idempotent
//!
//! Each call to [`Aggregator::analyze_all`] or [`Aggregator::analyze_hourly_only`]
//! adds to the existing counts. Feeding the same entries twice doubles every
//! count; create a fresh aggregator to start over.
//!
//! # Failed passes
//!
//! A pass stops at the first entry whose month, day or hour lies outside its
//! domain. That entry touches no counter, but entries before it remain counted.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::entry::LogEntry;
use crate::summary::Summary;

/// Number of hour slots (0–23).
pub const HOURS_PER_DAY: usize = 24;

/// Number of day slots (1–28). Months are modelled as 28 days long.
pub const DAYS_PER_MONTH: usize = 28;

/// Number of month slots (1–12).
pub const MONTHS_PER_YEAR: usize = 12;

/// The calendar fields the aggregator counts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Month,
    Day,
    Hour,
}

impl Field {
    /// Smallest valid value.
    pub const fn min(self) -> u8 {
        match self {
            Self::Hour => 0,
            Self::Month | Self::Day => 1,
        }
    }

    /// Largest valid value.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn max(self) -> u8 {
        match self {
            Self::Month => MONTHS_PER_YEAR as u8,
            Self::Day => DAYS_PER_MONTH as u8,
            Self::Hour => (HOURS_PER_DAY - 1) as u8,
        }
    }

    /// Maps a field value to its counter slot.
    fn slot(self, value: u8) -> Result<usize, AnalysisError> {
        if (self.min()..=self.max()).contains(&value) {
            Ok(usize::from(value - self.min()))
        } else {
            Err(AnalysisError::IndexOutOfRange { field: self, value })
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
        };
        write!(f, "{s}")
    }
}

/// Aggregation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// An entry carried a month, day or hour outside its domain.
    #[error("{field} {value} out of range (expected {min}..={max})", min = .field.min(), max = .field.max())]
    IndexOutOfRange { field: Field, value: u8 },

    /// The years divisor for averaging was zero.
    #[error("years span must be positive, got {years_span}")]
    InvalidArgument { years_span: u32 },
}

/// Hour, day and month access counters.
///
/// Counters start at zero and only ever grow. All query methods are pure
/// reads and return well-defined defaults on empty counters: the first slot
/// (month 1, day 1, hour 0) wins every comparison.
///
/// Analysis takes `&mut self`, so concurrent passes over one instance must be
/// serialized by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregator {
    hour_counts: [u64; HOURS_PER_DAY],
    day_counts: [u64; DAYS_PER_MONTH],
    month_counts: [u64; MONTHS_PER_YEAR],
}

impl Aggregator {
    /// Creates an aggregator with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every entry by hour, day and month in a single forward pass.
    ///
    /// Stops at the first out-of-domain entry. Not idempotent: see the
    /// [module documentation](self).
    pub fn analyze_all<I>(&mut self, entries: I) -> Result<(), AnalysisError>
    where
        I: IntoIterator<Item = LogEntry>,
    {
        let mut consumed: u64 = 0;
        for entry in entries {
            let slots = Field::Month.slot(entry.month).and_then(|month| {
                let day = Field::Day.slot(entry.day)?;
                let hour = Field::Hour.slot(entry.hour)?;
                Ok((month, day, hour))
            });
            let (month, day, hour) = match slots {
                Ok(slots) => slots,
                Err(err) => {
                    tracing::warn!(%err, %entry, consumed, "aborting full pass");
                    return Err(err);
                }
            };

            self.month_counts[month] += 1;
            self.day_counts[day] += 1;
            self.hour_counts[hour] += 1;
            consumed += 1;
        }

        tracing::debug!(consumed, "full pass complete");
        Ok(())
    }

    /// Counts entries by hour only. Day and month counters are untouched.
    pub fn analyze_hourly_only<I>(&mut self, entries: I) -> Result<(), AnalysisError>
    where
        I: IntoIterator<Item = LogEntry>,
    {
        let mut consumed: u64 = 0;
        for entry in entries {
            let hour = Field::Hour.slot(entry.hour).inspect_err(|err| {
                tracing::warn!(%err, %entry, consumed, "aborting hourly pass");
            })?;
            self.hour_counts[hour] += 1;
            consumed += 1;
        }

        tracing::debug!(consumed, "hourly pass complete");
        Ok(())
    }

    /// Total number of accesses seen by hourly or full passes.
    pub fn total_accesses(&self) -> u64 {
        self.hour_counts.iter().sum()
    }

    /// Counts per hour, index = hour.
    pub const fn hour_counts(&self) -> &[u64; HOURS_PER_DAY] {
        &self.hour_counts
    }

    /// Counts per day of month, index = day - 1.
    pub const fn day_counts(&self) -> &[u64; DAYS_PER_MONTH] {
        &self.day_counts
    }

    /// Counts per month summed over all years, index = month - 1.
    pub const fn totals_by_month(&self) -> &[u64; MONTHS_PER_YEAR] {
        &self.month_counts
    }

    /// Average accesses per month over `years_span` years.
    #[allow(clippy::cast_precision_loss)]
    pub fn averages_by_month(
        &self,
        years_span: u32,
    ) -> Result<[f64; MONTHS_PER_YEAR], AnalysisError> {
        if years_span == 0 {
            return Err(AnalysisError::InvalidArgument { years_span });
        }
        let years = f64::from(years_span);
        Ok(self.month_counts.map(|count| count as f64 / years))
    }

    /// Busiest month, 1-based.
    pub fn busiest_month(&self) -> usize {
        first_max(&self.month_counts) + 1
    }

    /// Quietest month, 1-based.
    pub fn quietest_month(&self) -> usize {
        first_min(&self.month_counts) + 1
    }

    /// Busiest day of the month, 1-based.
    pub fn busiest_day(&self) -> usize {
        first_max(&self.day_counts) + 1
    }

    /// Quietest day of the month, 1-based.
    pub fn quietest_day(&self) -> usize {
        first_min(&self.day_counts) + 1
    }

    /// Busiest hour of the day, 0-based.
    pub fn busiest_hour(&self) -> usize {
        first_max(&self.hour_counts)
    }

    /// Quietest hour of the day, 0-based.
    pub fn quietest_hour(&self) -> usize {
        first_min(&self.hour_counts)
    }

    /// Start hour of the busiest two-hour window.
    ///
    /// Windows wrap past midnight, so hour 23 pairs with hour 0. The lowest
    /// start hour wins ties.
    pub fn busiest_two_hour_window(&self) -> usize {
        let window = |start: usize| {
            self.hour_counts[start] + self.hour_counts[(start + 1) % HOURS_PER_DAY]
        };

        let mut best = 0;
        for start in 1..HOURS_PER_DAY {
            if window(start) > window(best) {
                best = start;
            }
        }
        best
    }

    /// Snapshot of every statistic, with averages over `years_span` years.
    pub fn summary(&self, years_span: u32) -> Result<Summary, AnalysisError> {
        Ok(Summary {
            years_span,
            total_accesses: self.total_accesses(),
            hour_counts: self.hour_counts,
            day_counts: self.day_counts,
            month_counts: self.month_counts,
            month_averages: self.averages_by_month(years_span)?,
            busiest_hour: self.busiest_hour(),
            quietest_hour: self.quietest_hour(),
            busiest_two_hour_window: self.busiest_two_hour_window(),
            busiest_day: self.busiest_day(),
            quietest_day: self.quietest_day(),
            busiest_month: self.busiest_month(),
            quietest_month: self.quietest_month(),
        })
    }
}

/// Index of the first maximum. Later equal values do not replace it.
fn first_max(counts: &[u64]) -> usize {
    first_by(counts, |candidate, best| candidate > best)
}

/// Index of the first minimum. Later equal values do not replace it.
fn first_min(counts: &[u64]) -> usize {
    first_by(counts, |candidate, best| candidate < best)
}

fn first_by(counts: &[u64], beats: impl Fn(u64, u64) -> bool) -> usize {
    let mut best = 0;
    for (idx, &count) in counts.iter().enumerate().skip(1) {
        if beats(count, counts[best]) {
            best = idx;
        }
    }
    best
}
