use std::str::FromStr;

use chrono::{DateTime, Datelike, Local, NaiveDate, TimeDelta, TimeZone, Timelike, Weekday};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::{
    compare::interval::{Interval, start_of_day},
    prelude::*,
};

/// The day a week boundary falls on.
pub const WEEK_START: Weekday = Weekday::Sun;

/// The four-week period ends with the current week and starts three weeks before it.
const FOUR_WEEKS_LEAD_DAYS: usize = 21;

/// How the current and the prior periods are delimited.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Hash, derive_more::Display, DeserializeFromStr, SerializeDisplay,
)]
pub enum ComparePeriod {
    #[display("day")]
    Day,

    #[display("week")]
    Week,

    #[display("four-weeks")]
    FourWeeks,
}

impl FromStr for ComparePeriod {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "four-weeks" | "fourweeks" | "four_weeks" => Ok(Self::FourWeeks),
            _ => Err(Error::UnknownPeriod(value.to_owned())),
        }
    }
}

impl ComparePeriod {
    /// Number of the period's sub-units elapsed since the current period began:
    /// hours for [`ComparePeriod::Day`], and days otherwise.
    #[must_use]
    pub fn elapsed_units<Tz: TimeZone>(self, now: &DateTime<Tz>) -> usize {
        match self {
            Self::Day => now.hour() as usize,
            Self::Week => days_since_week_start(now.date_naive()),
            Self::FourWeeks => days_since_week_start(now.date_naive()) + FOUR_WEEKS_LEAD_DAYS,
        }
    }

    /// Granularity of the readings the comparison is made of.
    #[must_use]
    pub const fn bar_duration(self) -> TimeDelta {
        match self {
            Self::Day => TimeDelta::hours(1),
            Self::Week | Self::FourWeeks => TimeDelta::days(1),
        }
    }

    /// Lookback window covering the prior period and the current period up to `now`.
    pub fn compare_interval(self, now: DateTime<Local>) -> Interval {
        let today = now.date_naive();
        let start_date = match self {
            Self::Day => today - TimeDelta::days(1),
            Self::Week => week_start(today) - TimeDelta::weeks(1),
            Self::FourWeeks => week_start(today) - TimeDelta::weeks(7),
        };
        Interval::new(start_of_day(start_date), now)
    }
}

fn days_since_week_start(date: NaiveDate) -> usize {
    let weekday = date.weekday().num_days_from_monday();
    ((weekday + 7 - WEEK_START.num_days_from_monday()) % 7) as usize
}

fn week_start(date: NaiveDate) -> NaiveDate {
    #[allow(clippy::cast_possible_wrap)]
    let days = days_since_week_start(date) as i64;
    date - TimeDelta::days(days)
}
