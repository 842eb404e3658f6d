//! Time-ranged analytics series for the usage chart.
//!
//! The series is mock data shaped like real traffic: a weekday/weekend
//! rhythm with a mild upward trend. It regenerates only when the time
//! range changes, never on a plain redraw.

use chrono::{Datelike, Duration, Local, Weekday};
use rand::RngExt;
use serde::Serialize;

/// Weekday baseline for API calls per day
const BASE_CALLS: f64 = 180_000.0;
/// Random spread added on top of the baseline
const CALLS_SPREAD: f64 = 80_000.0;
/// Weekend traffic multiplier
const WEEKEND_FACTOR: f64 = 0.7;
/// Total upward drift across the window
const TREND_LIFT: f64 = 0.3;

/// Selectable chart window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    #[default]
    Week,
    Month,
    Quarter,
}

impl TimeRange {
    /// Number of days covered by the range
    pub fn days(&self) -> usize {
        match self {
            TimeRange::Week => 7,
            TimeRange::Month => 30,
            TimeRange::Quarter => 90,
        }
    }

    /// Get the next range in cycle
    pub fn next(self) -> Self {
        match self {
            TimeRange::Week => TimeRange::Month,
            TimeRange::Month => TimeRange::Quarter,
            TimeRange::Quarter => TimeRange::Week,
        }
    }

    /// Display name for the chart header
    pub fn display_name(&self) -> &'static str {
        match self {
            TimeRange::Week => "Last 7 days",
            TimeRange::Month => "Last 30 days",
            TimeRange::Quarter => "Last 3 months",
        }
    }
}

/// One day of analytics data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsPoint {
    /// Day label, e.g. "Aug 22"
    pub label: String,
    /// API calls that day
    pub calls: u64,
    /// Token usage that day, in thousands
    pub tokens: u64,
}

/// Totals across the current series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalyticsTotals {
    pub calls: u64,
    pub tokens: u64,
}

/// Chart state: the selected range plus its series, regenerated only
/// when the range changes
#[derive(Debug, Clone)]
pub struct UsageAnalytics {
    range: TimeRange,
    series: Vec<AnalyticsPoint>,
}

impl UsageAnalytics {
    pub fn new() -> Self {
        let range = TimeRange::default();
        Self {
            range,
            series: generate_series(range),
        }
    }

    pub fn range(&self) -> TimeRange {
        self.range
    }

    pub fn series(&self) -> &[AnalyticsPoint] {
        &self.series
    }

    /// Switch to the next time range and regenerate the series
    pub fn cycle_range(&mut self) {
        self.set_range(self.range.next());
    }

    /// Select a range. Setting the current range again keeps the
    /// existing series (memoized by range, not by render).
    pub fn set_range(&mut self, range: TimeRange) {
        if range == self.range {
            return;
        }
        self.range = range;
        self.series = generate_series(range);
    }

    /// Sum of calls and tokens across the series
    pub fn totals(&self) -> AnalyticsTotals {
        self.series.iter().fold(AnalyticsTotals::default(), |acc, p| {
            AnalyticsTotals {
                calls: acc.calls + p.calls,
                tokens: acc.tokens + p.tokens,
            }
        })
    }
}

impl Default for UsageAnalytics {
    fn default() -> Self {
        Self::new()
    }
}

/// Generate one day-per-point series ending today
pub fn generate_series(range: TimeRange) -> Vec<AnalyticsPoint> {
    let mut rng = rand::rng();
    let days = range.days();
    let today = Local::now().date_naive();

    (0..days as i64)
        .rev()
        .map(|back| {
            let date = today - Duration::days(back);
            let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
            let weekday_factor = if weekend { WEEKEND_FACTOR } else { 1.0 };
            // Older days carry more lift so the curve drifts upward
            let trend_factor = 1.0 + (back as f64 / days as f64) * TREND_LIFT;

            let base = BASE_CALLS + rng.random_range(0.0..CALLS_SPREAD);
            let calls = (base * weekday_factor * trend_factor) as u64;
            let tokens_per_call = 250.0 + rng.random_range(0.0..100.0);
            let tokens = (calls as f64 * tokens_per_call / 1_000.0) as u64;

            AnalyticsPoint {
                label: date.format("%b %-d").to_string(),
                calls,
                tokens,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_range_days_and_cycle() {
        assert_eq!(TimeRange::Week.days(), 7);
        assert_eq!(TimeRange::Month.days(), 30);
        assert_eq!(TimeRange::Quarter.days(), 90);

        assert_eq!(TimeRange::Week.next(), TimeRange::Month);
        assert_eq!(TimeRange::Month.next(), TimeRange::Quarter);
        assert_eq!(TimeRange::Quarter.next(), TimeRange::Week);
    }

    #[test]
    fn test_series_length_matches_range() {
        for range in [TimeRange::Week, TimeRange::Month, TimeRange::Quarter] {
            assert_eq!(generate_series(range).len(), range.days());
        }
    }

    #[test]
    fn test_series_values_positive() {
        for point in generate_series(TimeRange::Month) {
            assert!(point.calls > 0);
            assert!(point.tokens > 0);
        }
    }

    #[test]
    fn test_set_same_range_keeps_series() {
        let mut analytics = UsageAnalytics::new();
        let before = analytics.series().to_vec();
        analytics.set_range(TimeRange::Week);
        assert_eq!(analytics.series(), before.as_slice());
    }

    #[test]
    fn test_cycle_range_regenerates() {
        let mut analytics = UsageAnalytics::new();
        assert_eq!(analytics.range(), TimeRange::Week);
        analytics.cycle_range();
        assert_eq!(analytics.range(), TimeRange::Month);
        assert_eq!(analytics.series().len(), 30);
    }

    #[test]
    fn test_totals_sum_series() {
        let analytics = UsageAnalytics::new();
        let totals = analytics.totals();
        let calls: u64 = analytics.series().iter().map(|p| p.calls).sum();
        let tokens: u64 = analytics.series().iter().map(|p| p.tokens).sum();
        assert_eq!(totals.calls, calls);
        assert_eq!(totals.tokens, tokens);
    }
}
