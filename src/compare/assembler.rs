use chrono::{DateTime, TimeZone};

use crate::{
    compare::{
        entity::{Entity, EntityId},
        interval::Interval,
        period::ComparePeriod,
        readings::{ReadingsAvailability, ReadingsKey},
        source::UsageSource,
        usage::PeriodUsage,
    },
    prelude::*,
};

/// Compare the current period with the prior one for each of the selected entities.
///
/// Entities whose readings are not there yet are skipped. The output
/// follows the order of `ids`.
#[instrument(skip_all, fields(kind = %S::KIND, period = %period, n_ids = ids.len()))]
pub fn assemble<S, Tz>(
    ids: &[EntityId],
    source: &S,
    period: ComparePeriod,
    time_interval: Interval,
    now: &DateTime<Tz>,
) -> Result<Vec<Entity>>
where
    S: UsageSource,
    Tz: TimeZone,
{
    let key = ReadingsKey { time_interval, duration: period.bar_duration() };
    ids.iter()
        .map(|id| assemble_entity(*id, source, period, &key, now))
        .filter_map(Result::transpose)
        .collect()
}

fn assemble_entity<S, Tz>(
    id: EntityId,
    source: &S,
    period: ComparePeriod,
    key: &ReadingsKey,
    now: &DateTime<Tz>,
) -> Result<Option<Entity>>
where
    S: UsageSource,
    Tz: TimeZone,
{
    let name = source.name(id).ok_or(Error::UnknownEntity { kind: S::KIND, id })?;
    let Some(series) = source.readings(id, key).and_then(ReadingsAvailability::series) else {
        debug!(id, "readings are not ready yet");
        return Ok(None);
    };

    let elapsed = period.elapsed_units(now);
    if series.len() < elapsed {
        return Err(Error::InsufficientData {
            id,
            time_interval: key.time_interval,
            duration: key.duration,
            have: series.len(),
            need: elapsed,
        });
    }

    let usage = PeriodUsage::split(series, elapsed, now);
    let entity = Entity::builder()
        .id(id)
        .is_group(S::KIND.is_group())
        .name(name.to_owned())
        .change(usage.relative_change())
        .last_period_total_usage(usage.last_period_total)
        .current_period_usage(usage.current)
        .used_to_this_point_last_time_period(usage.to_this_point_last_period)
        .build();
    debug!(
        id,
        elapsed,
        current = ?entity.current_period_usage,
        to_this_point = ?entity.used_to_this_point_last_time_period,
        change = entity.change,
        "compared"
    );
    Ok(Some(entity))
}
