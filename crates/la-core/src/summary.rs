//! Serializable snapshot of aggregated statistics.

use serde::{Deserialize, Serialize};

use crate::aggregator::{DAYS_PER_MONTH, HOURS_PER_DAY, MONTHS_PER_YEAR};

/// Every count and derived statistic of an [`Aggregator`](crate::Aggregator)
/// at one point in time.
///
/// Produced by [`Aggregator::summary`](crate::Aggregator::summary). Months and
/// days are 1-based, hours 0-based, matching the aggregator's queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Divisor used for `month_averages`.
    pub years_span: u32,
    pub total_accesses: u64,
    pub hour_counts: [u64; HOURS_PER_DAY],
    pub day_counts: [u64; DAYS_PER_MONTH],
    pub month_counts: [u64; MONTHS_PER_YEAR],
    pub month_averages: [f64; MONTHS_PER_YEAR],
    pub busiest_hour: usize,
    pub quietest_hour: usize,
    /// Start hour of the busiest two-hour window (wraps past midnight).
    pub busiest_two_hour_window: usize,
    pub busiest_day: usize,
    pub quietest_day: usize,
    pub busiest_month: usize,
    pub quietest_month: usize,
}
