use chrono::{DateTime, Local, TimeDelta};
use itertools::Itertools;
use serde::Deserialize;

use crate::{compare::interval::Interval, prelude::*, quantity::energy::KilowattHours};

pub type Reading = (DateTime<Local>, KilowattHours);

/// Energy readings of a single entity, strictly ascending by timestamp.
///
/// Index 0 holds the earliest sample and the last index holds the most recent one.
#[derive(Clone, Debug, Default, Deserialize, derive_more::Deref)]
#[serde(try_from = "Vec<Reading>")]
pub struct ReadingSeries(Vec<Reading>);

impl TryFrom<Vec<Reading>> for ReadingSeries {
    type Error = Error;

    fn try_from(readings: Vec<Reading>) -> Result<Self> {
        if let Some(index) = readings.iter().position(|(_, value)| value.0.is_nan() || value.0 < 0.0) {
            return Err(Error::InvalidReadings { index, reason: "usage must be non-negative" });
        }
        if let Some(index) = readings
            .iter()
            .tuple_windows()
            .position(|((left_timestamp, _), (right_timestamp, _))| left_timestamp >= right_timestamp)
        {
            return Err(Error::InvalidReadings {
                index: index + 1,
                reason: "timestamps must be strictly ascending",
            });
        }
        Ok(Self(readings))
    }
}

/// Key the external readings cache is indexed by, besides the entity ID.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ReadingsKey {
    pub time_interval: Interval,

    /// Duration of a single reading («bar»).
    pub duration: TimeDelta,
}

/// Readings as seen by the cache: possibly still fetching, possibly absent.
#[derive(Clone, Debug, Default)]
pub struct ReadingsAvailability {
    pub is_fetching: bool,
    pub readings: Option<ReadingSeries>,
}

impl ReadingsAvailability {
    pub const fn fetching() -> Self {
        Self { is_fetching: true, readings: None }
    }

    pub const fn ready(readings: ReadingSeries) -> Self {
        Self { is_fetching: false, readings: Some(readings) }
    }

    /// The series, unless it is still fetching or absent.
    #[must_use]
    pub const fn series(&self) -> Option<&ReadingSeries> {
        if self.is_fetching { None } else { self.readings.as_ref() }
    }
}

#[cfg(test)]
impl ReadingSeries {
    /// Build an hourly series starting at `start`.
    pub fn hourly(start: DateTime<Local>, values: impl IntoIterator<Item = f64>) -> Self {
        let readings: Vec<Reading> = (0..)
            .zip(values)
            .map(|(hour, value)| (start + TimeDelta::hours(hour), KilowattHours::from(value)))
            .collect();
        Self::try_from(readings).unwrap()
    }
}
