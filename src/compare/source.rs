use std::collections::HashMap;

use crate::compare::{
    entity::{EntityId, EntityKind},
    readings::{ReadingsAvailability, ReadingsKey},
};

/// Read-only registry of a single kind of usage entities: meters or groups.
pub trait UsageSource {
    const KIND: EntityKind;

    fn name(&self, id: EntityId) -> Option<&str>;

    fn readings(&self, id: EntityId, key: &ReadingsKey) -> Option<&ReadingsAvailability>;
}

/// Names and cached readings by entity ID.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    names: HashMap<EntityId, String>,
    readings: HashMap<(EntityId, ReadingsKey), ReadingsAvailability>,
}

impl Catalog {
    #[must_use]
    pub fn with_name(mut self, id: EntityId, name: impl Into<String>) -> Self {
        self.insert_name(id, name);
        self
    }

    #[must_use]
    pub fn with_readings(
        mut self,
        id: EntityId,
        key: ReadingsKey,
        availability: ReadingsAvailability,
    ) -> Self {
        self.insert_readings(id, key, availability);
        self
    }

    pub fn insert_name(&mut self, id: EntityId, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    pub fn insert_readings(
        &mut self,
        id: EntityId,
        key: ReadingsKey,
        availability: ReadingsAvailability,
    ) {
        self.readings.insert((id, key), availability);
    }

    fn name(&self, id: EntityId) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    fn readings(&self, id: EntityId, key: &ReadingsKey) -> Option<&ReadingsAvailability> {
        self.readings.get(&(id, *key))
    }
}

#[derive(Clone, Debug, Default, derive_more::From)]
pub struct Meters(pub Catalog);

impl UsageSource for Meters {
    const KIND: EntityKind = EntityKind::Meter;

    fn name(&self, id: EntityId) -> Option<&str> {
        self.0.name(id)
    }

    fn readings(&self, id: EntityId, key: &ReadingsKey) -> Option<&ReadingsAvailability> {
        self.0.readings(id, key)
    }
}

#[derive(Clone, Debug, Default, derive_more::From)]
pub struct Groups(pub Catalog);

impl UsageSource for Groups {
    const KIND: EntityKind = EntityKind::Group;

    fn name(&self, id: EntityId) -> Option<&str> {
        self.0.name(id)
    }

    fn readings(&self, id: EntityId, key: &ReadingsKey) -> Option<&ReadingsAvailability> {
        self.0.readings(id, key)
    }
}
