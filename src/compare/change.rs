use serde::Serialize;

use crate::quantity::energy::KilowattHours;

/// Signed relative change of the current period against the same point of the prior one.
///
/// The prior period total cancels out, leaving `current / to_this_point - 1`.
/// A zero `to_this_point` makes the change non-finite.
#[must_use]
pub fn relative_change(
    current: KilowattHours,
    to_this_point_last_period: KilowattHours,
    last_period_total: KilowattHours,
) -> f64 {
    -1.0 + ((current.0 / to_this_point_last_period.0) * last_period_total.0) / last_period_total.0
}

/// Direction of the change, «green» or «red» on the chart.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trend {
    Decrease,

    /// Also reported for a non-finite or undefined change.
    Increase,
}

impl From<f64> for Trend {
    fn from(change: f64) -> Self {
        if change < 0.0 { Self::Decrease } else { Self::Increase }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_relative_change() {
        let change = relative_change(
            KilowattHours::from(15.0),
            KilowattHours::from(10.0),
            KilowattHours::from(40.0),
        );
        assert_abs_diff_eq!(change, 0.5);

        let change = relative_change(
            KilowattHours::from(5.0),
            KilowattHours::from(20.0),
            KilowattHours::from(40.0),
        );
        assert_abs_diff_eq!(change, -0.75);
    }

    #[test]
    fn test_last_period_total_cancels_out() {
        let current = KilowattHours::from(7.3);
        let to_this_point = KilowattHours::from(3.1);
        let reference = relative_change(current, to_this_point, KilowattHours::from(1.0));
        for last_period_total in [0.001, 2.5, 163.0, 1e6] {
            let change =
                relative_change(current, to_this_point, KilowattHours::from(last_period_total));
            assert_abs_diff_eq!(change, reference, epsilon = 1e-12);
        }
        assert_abs_diff_eq!(reference, 7.3 / 3.1 - 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_division_by_zero() {
        let change =
            relative_change(KilowattHours::from(1.0), KilowattHours::ZERO, KilowattHours::from(5.0));
        assert!(change.is_infinite());

        let change = relative_change(KilowattHours::ZERO, KilowattHours::ZERO, KilowattHours::from(5.0));
        assert!(change.is_nan());
    }

    #[test]
    fn test_zero_last_period_total() {
        let change =
            relative_change(KilowattHours::from(1.0), KilowattHours::from(1.0), KilowattHours::ZERO);
        assert!(change.is_nan());
    }

    #[test]
    fn test_trend() {
        assert_eq!(Trend::from(-0.1), Trend::Decrease);
        assert_eq!(Trend::from(0.0), Trend::Increase);
        assert_eq!(Trend::from(0.3), Trend::Increase);
        assert_eq!(Trend::from(f64::NAN), Trend::Increase);
    }
}
