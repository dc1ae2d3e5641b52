use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{FtError, FtResult};
use crate::ned::NedVector;

/// One group of objects: spatial placement, travel statistics, and the
/// active time window, expressed as one input table row.
///
/// Times are percentages of a normalized simulation duration, so every
/// window lives inside [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupDefinition {
    /// Unique positive group id.
    pub group_id: u32,
    /// Number of objects to generate for this group.
    pub group_size: u32,
    /// Start of the active window, percent of total duration.
    pub start_percent: f64,
    /// End of the active window, percent of total duration.
    pub stop_percent: f64,
    /// North coordinate of the group center, meters.
    pub center_north: f64,
    /// East coordinate of the group center, meters.
    pub center_east: f64,
    /// Down coordinate of the group center, meters.
    pub center_down: f64,
    /// Standard deviation of object placement around the center, per axis.
    pub spread_std: f64,
    /// Mean travel distance for objects in this group, meters.
    pub mean_travel_distance: f64,
    /// Standard deviation of the travel distance, meters.
    pub travel_std: f64,
    /// Object category, 1 through 3.
    pub category: u8,
}

impl GroupDefinition {
    /// The group center as a NED vector.
    pub fn center(&self) -> NedVector {
        NedVector::new(self.center_north, self.center_east, self.center_down)
    }

    /// Inclusive membership test for the active window.
    pub fn contains_time(&self, time_percent: f64) -> bool {
        self.start_percent <= time_percent && time_percent <= self.stop_percent
    }

    /// Check every row-level constraint, reporting the first violation.
    pub fn validate(&self) -> FtResult<()> {
        if self.group_id == 0 {
            return Err(self.violation("group_id must be positive"));
        }
        if !(1..=3).contains(&self.category) {
            return Err(self.violation("category must be 1, 2, or 3"));
        }
        if self.spread_std <= 0.0 {
            return Err(self.violation("spread_std must be positive"));
        }
        if self.mean_travel_distance < 0.0 {
            return Err(self.violation("mean_travel_distance must be non-negative"));
        }
        if self.travel_std <= 0.0 {
            return Err(self.violation("travel_std must be positive"));
        }
        if self.group_size == 0 {
            return Err(self.violation("group_size must be positive"));
        }
        if self.start_percent < 0.0 || self.start_percent > 100.0 {
            return Err(self.violation("start_percent must be between 0 and 100"));
        }
        if self.stop_percent < 0.0 || self.stop_percent > 100.0 {
            return Err(self.violation("stop_percent must be between 0 and 100"));
        }
        if self.stop_percent <= self.start_percent {
            return Err(self.violation("stop_percent must be greater than start_percent"));
        }
        Ok(())
    }

    fn violation(&self, rule: &str) -> FtError {
        FtError::InvalidGroup {
            group_id: self.group_id,
            rule: rule.to_string(),
        }
    }
}

/// Validate a whole batch of group definitions.
///
/// The batch is all-or-nothing: the first row violation (or duplicate
/// group id) rejects every row, and the caller must fix the input and
/// resubmit.
pub fn validate_groups(groups: &[GroupDefinition]) -> FtResult<()> {
    let mut seen = HashSet::new();
    for group in groups {
        group.validate()?;
        if !seen.insert(group.group_id) {
            return Err(FtError::DuplicateGroupId(group.group_id));
        }
    }
    Ok(())
}
