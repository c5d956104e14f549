use std::ops::Range;

use chrono::{DateTime, TimeZone, Timelike};

use crate::{
    compare::{change::relative_change, readings::ReadingSeries},
    quantity::energy::KilowattHours,
};

impl ReadingSeries {
    /// Sum the usage over the index range, clamped to the series.
    #[must_use]
    pub fn sum_range(&self, range: Range<usize>) -> KilowattHours {
        self.iter()
            .skip(range.start)
            .take(range.end.saturating_sub(range.start))
            .map(|(_, value)| *value)
            .sum()
    }

    /// Usage up to the same elapsed offset into the prior period.
    ///
    /// Exactly at a period boundary there is nothing to match, so the first reading
    /// is prorated by the part of the day passed.
    #[must_use]
    pub fn used_to_this_point_last_period<Tz: TimeZone>(
        &self,
        elapsed: usize,
        now: &DateTime<Tz>,
    ) -> KilowattHours {
        if elapsed == 0 {
            self.first().map_or(KilowattHours::ZERO, |(_, first_value)| {
                (*first_value / 24.0 * f64::from(now.hour())).round()
            })
        } else {
            self.sum_range(0..elapsed)
        }
    }
}

/// The series split at the elapsed boundary of the current period.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PeriodUsage {
    /// Trailing `elapsed` readings.
    pub current: KilowattHours,

    /// Everything before the current period.
    pub last_period_total: KilowattHours,

    pub to_this_point_last_period: KilowattHours,
}

impl PeriodUsage {
    /// Assumes `series.len() >= elapsed`, otherwise the current period absorbs the whole series.
    pub fn split<Tz: TimeZone>(series: &ReadingSeries, elapsed: usize, now: &DateTime<Tz>) -> Self {
        let boundary = series.len().saturating_sub(elapsed);
        Self {
            current: series.sum_range(boundary..series.len()),
            last_period_total: series.sum_range(0..boundary),
            to_this_point_last_period: series.used_to_this_point_last_period(elapsed, now),
        }
    }

    #[must_use]
    pub fn relative_change(&self) -> f64 {
        relative_change(self.current, self.to_this_point_last_period, self.last_period_total)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::{Local, TimeDelta};

    use super::*;

    fn midnight() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 10, 13, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_sum_range() {
        let series = ReadingSeries::hourly(midnight(), [1.0, 2.0, 3.0, 4.0]);
        assert_abs_diff_eq!(series.sum_range(1..3).0, 5.0);
        assert_abs_diff_eq!(series.sum_range(0..4).0, 10.0);
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_sum_empty_range() {
        let series = ReadingSeries::hourly(midnight(), [1.0, 2.0, 3.0]);
        assert_abs_diff_eq!(series.sum_range(2..2).0, 0.0);
        assert_abs_diff_eq!(series.sum_range(3..1).0, 0.0);
        assert_abs_diff_eq!(ReadingSeries::default().sum_range(0..5).0, 0.0);
    }

    #[test]
    fn test_empty_range_is_positive_zero() {
        let series = ReadingSeries::hourly(midnight(), [1.0, 2.0, 3.0]);
        let sum = series.sum_range(2..2);
        assert!(!sum.0.is_sign_negative());
        assert_eq!(sum.to_string(), "0.00 kWh");
    }

    #[test]
    fn test_current_is_positive_zero_at_period_start() {
        let series = ReadingSeries::hourly(midnight(), [1.0, 2.0]);
        let usage = PeriodUsage::split(&series, 0, &midnight());
        assert!(!usage.current.0.is_sign_negative());
        let usage = PeriodUsage::split(&series, 2, &midnight());
        assert!(!usage.last_period_total.0.is_sign_negative());
    }

    #[test]
    fn test_sum_range_is_clamped() {
        let series = ReadingSeries::hourly(midnight(), [1.0, 2.0, 3.0]);
        assert_abs_diff_eq!(series.sum_range(1..10).0, 5.0);
    }

    #[test]
    fn test_split_partitions_series() {
        let values = [0.3, 1.7, 2.2, 0.0, 4.1, 0.9, 3.3, 1.1];
        let series = ReadingSeries::hourly(midnight(), values);
        let now = midnight() + TimeDelta::hours(8);
        for elapsed in 0..=values.len() {
            let usage = PeriodUsage::split(&series, elapsed, &now);
            let total = (usage.current + usage.last_period_total).0;
            assert_abs_diff_eq!(total, values.iter().sum::<f64>(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_current_is_trailing_slice() {
        let series = ReadingSeries::hourly(midnight(), [10.0, 20.0, 1.0, 2.0, 3.0]);
        let now = midnight() + TimeDelta::hours(3);
        let usage = PeriodUsage::split(&series, 3, &now);
        assert_abs_diff_eq!(usage.current.0, 6.0);
        assert_abs_diff_eq!(usage.last_period_total.0, 30.0);
        assert_abs_diff_eq!(usage.to_this_point_last_period.0, 31.0);
    }

    #[test]
    fn test_elapsed_zero_prorates_first_reading() {
        let series = ReadingSeries::hourly(midnight(), [24.0, 100.0]);
        let now = Local.with_ymd_and_hms(2025, 10, 12, 6, 0, 0).unwrap();
        assert_abs_diff_eq!(series.used_to_this_point_last_period(0, &now).0, 6.0);
    }

    #[test]
    fn test_elapsed_zero_rounds() {
        let series = ReadingSeries::hourly(midnight(), [10.0]);
        let now = Local.with_ymd_and_hms(2025, 10, 12, 5, 0, 0).unwrap();
        // 10 / 24 × 5 ≈ 2.08
        assert_abs_diff_eq!(series.used_to_this_point_last_period(0, &now).0, 2.0);
    }

    #[test]
    fn test_elapsed_zero_empty_series() {
        let now = Local.with_ymd_and_hms(2025, 10, 12, 5, 0, 0).unwrap();
        assert_abs_diff_eq!(ReadingSeries::default().used_to_this_point_last_period(0, &now).0, 0.0);
    }

    #[test]
    fn test_to_this_point_is_leading_slice() {
        let series = ReadingSeries::hourly(midnight(), [1.0, 2.0, 4.0, 8.0]);
        let now = midnight() + TimeDelta::hours(2);
        assert_abs_diff_eq!(series.used_to_this_point_last_period(2, &now).0, 3.0);
    }
}
