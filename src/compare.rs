pub mod assembler;
pub mod change;
pub mod entity;
pub mod interval;
pub mod period;
pub mod readings;
pub mod source;
pub mod usage;

pub use self::{
    assembler::assemble,
    change::{Trend, relative_change},
    entity::{Entity, EntityId, EntityKind},
    interval::Interval,
    period::ComparePeriod,
    readings::{Reading, ReadingSeries, ReadingsAvailability, ReadingsKey},
    source::{Catalog, Groups, Meters, UsageSource},
    usage::PeriodUsage,
};
