use chrono::TimeDelta;

use crate::compare::{
    entity::{EntityId, EntityKind},
    interval::Interval,
};

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown period value: `{0}`")]
    UnknownPeriod(String),

    #[error(
        "insufficient readings to compare {id} over {time_interval:?} with {duration} bars: \
         have {have}, but the last {need} are needed"
    )]
    InsufficientData {
        id: EntityId,
        time_interval: Interval,
        duration: TimeDelta,
        have: usize,
        need: usize,
    },

    #[error("unknown {kind} {id}")]
    UnknownEntity { kind: EntityKind, id: EntityId },

    #[error("invalid reading #{index}: {reason}")]
    InvalidReadings { index: usize, reason: &'static str },
}
