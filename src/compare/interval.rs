use std::fmt::{Debug, Formatter};

use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeDelta, TimeZone};
use serde::{Deserialize, Serialize};

/// Time interval the readings were requested for.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[must_use]
pub struct Interval {
    /// Inclusive.
    pub start: DateTime<Local>,

    /// Exclusive.
    pub end: DateTime<Local>,
}

impl Debug for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}..{:?}", self.start, self.end)
    }
}

impl Interval {
    pub const fn new(start: DateTime<Local>, end: DateTime<Local>) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn duration(self) -> TimeDelta {
        self.end - self.start
    }
}

/// Local midnight of the date, or the first valid instant after it when midnight is skipped.
pub fn start_of_day(date: NaiveDate) -> DateTime<Local> {
    let midnight = date.and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .or_else(|| Local.from_local_datetime(&(midnight + TimeDelta::hours(1))).earliest())
        .unwrap_or_else(|| Local.from_utc_datetime(&midnight))
}
