use serde::{Deserialize, Serialize};

use crate::ned::NedVector;

/// The (object, group) pair that identifies one moving object across tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectIdentity {
    /// The object's id within the simulated batch.
    pub object_id: u32,
    /// The id of the group the object belongs to.
    pub group_id: u32,
}

/// One simulated object: where it starts, where it ends, and how far it
/// travels. Immutable once generated.
///
/// The CSV shape keeps the positions flat (`start_north` .. `end_down`);
/// use [`SimulatedObject::start`] and [`SimulatedObject::end`] for vector
/// arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedObject {
    /// Sequential id, unique across the whole batch (not reset per group).
    pub object_id: u32,
    /// Id of the parent group.
    pub group_id: u32,
    /// Category copied from the parent group.
    pub category: u8,
    /// North coordinate of the start position.
    pub start_north: f64,
    /// East coordinate of the start position.
    pub start_east: f64,
    /// Down coordinate of the start position.
    pub start_down: f64,
    /// North coordinate of the end position.
    pub end_north: f64,
    /// East coordinate of the end position.
    pub end_east: f64,
    /// Down coordinate of the end position.
    pub end_down: f64,
    /// Euclidean distance from start to end, never negative.
    pub travel_distance: f64,
}

impl SimulatedObject {
    /// Build an object record from its positions.
    pub fn new(
        object_id: u32,
        group_id: u32,
        category: u8,
        start: NedVector,
        end: NedVector,
        travel_distance: f64,
    ) -> Self {
        Self {
            object_id,
            group_id,
            category,
            start_north: start.north,
            start_east: start.east,
            start_down: start.down,
            end_north: end.north,
            end_east: end.east,
            end_down: end.down,
            travel_distance,
        }
    }

    /// Start position as a NED vector.
    pub fn start(&self) -> NedVector {
        NedVector::new(self.start_north, self.start_east, self.start_down)
    }

    /// End position as a NED vector.
    pub fn end(&self) -> NedVector {
        NedVector::new(self.end_north, self.end_east, self.end_down)
    }

    /// The identity pair used when mapping objects to entity keys.
    pub fn identity(&self) -> ObjectIdentity {
        ObjectIdentity {
            object_id: self.object_id,
            group_id: self.group_id,
        }
    }
}

/// One object's position at one sampled time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    /// Id of the sampled object.
    pub object_id: u32,
    /// Id of the object's group.
    pub group_id: u32,
    /// Category copied from the group.
    pub category: u8,
    /// Sample time, percent of total duration, inside the group's window.
    pub time_percent: f64,
    /// North coordinate at this time.
    pub north: f64,
    /// East coordinate at this time.
    pub east: f64,
    /// Down coordinate at this time.
    pub down: f64,
}

impl TrajectorySample {
    /// Position at this sample as a NED vector.
    pub fn position(&self) -> NedVector {
        NedVector::new(self.north, self.east, self.down)
    }

    /// The identity pair used when mapping samples to entity keys.
    pub fn identity(&self) -> ObjectIdentity {
        ObjectIdentity {
            object_id: self.object_id,
            group_id: self.group_id,
        }
    }
}
