use serde::Serialize;

use crate::{compare::change::Trend, quantity::energy::KilowattHours};

pub type EntityId = u32;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, derive_more::Display)]
pub enum EntityKind {
    #[display("meter")]
    Meter,

    #[display("group")]
    Group,
}

impl EntityKind {
    #[must_use]
    pub const fn is_group(self) -> bool {
        matches!(self, Self::Group)
    }
}

/// Usage comparison of a single meter or group.
#[must_use]
#[derive(Clone, Debug, Serialize, bon::Builder)]
pub struct Entity {
    pub id: EntityId,
    pub is_group: bool,
    pub name: String,
    pub change: f64,
    pub last_period_total_usage: KilowattHours,
    pub current_period_usage: KilowattHours,
    pub used_to_this_point_last_time_period: KilowattHours,
}

impl Entity {
    pub fn trend(&self) -> Trend {
        Trend::from(self.change)
    }

    /// Current period usage extrapolated to the whole period at the prior period's pace.
    #[must_use]
    pub fn projected_period_usage(&self) -> KilowattHours {
        let pace = self.current_period_usage.0 / self.used_to_this_point_last_time_period.0;
        (self.last_period_total_usage * pace).round()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    fn entity(current: f64, to_this_point: f64, last_period_total: f64, change: f64) -> Entity {
        Entity::builder()
            .id(1)
            .is_group(false)
            .name("Library".to_owned())
            .change(change)
            .current_period_usage(KilowattHours::from(current))
            .used_to_this_point_last_time_period(KilowattHours::from(to_this_point))
            .last_period_total_usage(KilowattHours::from(last_period_total))
            .build()
    }

    #[test]
    fn test_projected_period_usage() {
        let entity = entity(6.0, 4.0, 25.0, 0.5);
        assert_abs_diff_eq!(entity.projected_period_usage().0, 38.0);
        assert_eq!(entity.trend(), Trend::Increase);
    }

    #[test]
    fn test_decrease() {
        assert_eq!(entity(2.0, 4.0, 25.0, -0.5).trend(), Trend::Decrease);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_value(entity(6.0, 4.0, 25.0, 0.5)).unwrap();
        assert_eq!(json["is_group"], false);
        assert_eq!(json["current_period_usage"], 6.0);
        assert_eq!(json["used_to_this_point_last_time_period"], 4.0);
    }

    #[test]
    fn test_kind() {
        assert!(EntityKind::Group.is_group());
        assert!(!EntityKind::Meter.is_group());
        assert_eq!(EntityKind::Meter.to_string(), "meter");
    }
}
