use std::{fmt::Debug, fs, path::Path};

use anyhow::Context;
use chrono::{DateTime, Local, TimeDelta};
use serde::{Deserialize, Serialize};
use serde_with::{DurationSeconds, serde_as};

use crate::{
    compare::{
        Catalog,
        ComparePeriod,
        Entity,
        EntityId,
        Groups,
        Interval,
        Meters,
        ReadingSeries,
        ReadingsAvailability,
        ReadingsKey,
        assemble,
    },
    prelude::*,
};

/// Dashboard state the comparison is computed from.
#[derive(Deserialize)]
pub struct Snapshot {
    pub period: ComparePeriod,

    /// Evaluation instant, defaults to the current time.
    #[serde(default)]
    pub now: Option<DateTime<Local>>,

    /// Requested readings window, defaults to [`ComparePeriod::compare_interval`].
    #[serde(default)]
    pub time_interval: Option<Interval>,

    #[serde(default)]
    pub selected_meters: Vec<EntityId>,

    #[serde(default)]
    pub selected_groups: Vec<EntityId>,

    #[serde(default)]
    pub meters: Vec<EntityRecord>,

    #[serde(default)]
    pub groups: Vec<EntityRecord>,
}

#[derive(Deserialize)]
pub struct EntityRecord {
    pub id: EntityId,
    pub name: String,

    #[serde(default)]
    pub readings: Vec<ReadingsRecord>,
}

/// Cached readings of the snapshot's window at the specific bar duration.
#[serde_as]
#[derive(Deserialize)]
pub struct ReadingsRecord {
    #[serde_as(as = "DurationSeconds<i64>")]
    #[serde(rename = "duration_secs")]
    pub duration: TimeDelta,

    #[serde(default)]
    pub is_fetching: bool,

    #[serde(default)]
    pub readings: Option<ReadingSeries>,
}

impl Snapshot {
    #[instrument(name = "reading the snapshot…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read the snapshot from `{}`", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("failed to parse the snapshot `{}`", path.display()))
    }
}

fn build_catalog(records: Vec<EntityRecord>, time_interval: Interval) -> Catalog {
    let mut catalog = Catalog::default();
    for record in records {
        catalog.insert_name(record.id, record.name);
        for readings in record.readings {
            let key = ReadingsKey { time_interval, duration: readings.duration };
            let availability = ReadingsAvailability {
                is_fetching: readings.is_fetching,
                readings: readings.readings,
            };
            catalog.insert_readings(record.id, key, availability);
        }
    }
    catalog
}

/// Selected meters and groups, compared.
#[must_use]
#[derive(Debug, Serialize)]
pub struct Comparison {
    pub period: ComparePeriod,
    pub time_interval: Interval,
    pub meters: Vec<Entity>,
    pub groups: Vec<Entity>,
}

impl Comparison {
    /// Compare the snapshot's selection, meters first.
    ///
    /// `period` overrides the snapshot's one.
    pub fn compute(
        snapshot: Snapshot,
        period: Option<ComparePeriod>,
        now: DateTime<Local>,
    ) -> Result<Self> {
        let period = period.unwrap_or(snapshot.period);
        let time_interval =
            snapshot.time_interval.unwrap_or_else(|| period.compare_interval(now));
        info!(%period, ?time_interval, %now, "comparing…");

        let meters = Meters(build_catalog(snapshot.meters, time_interval));
        let groups = Groups(build_catalog(snapshot.groups, time_interval));
        Ok(Self {
            period,
            time_interval,
            meters: assemble(&snapshot.selected_meters, &meters, period, time_interval, &now)?,
            groups: assemble(&snapshot.selected_groups, &groups, period, time_interval, &now)?,
        })
    }
}
