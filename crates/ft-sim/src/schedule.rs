use ft_core::{FtError, GroupDefinition};
use serde::Serialize;

use crate::error::{SimError, SimResult};

/// Maximum number of groups a roster may contain.
pub const MAX_GROUPS: usize = 5;

/// Validate roster-level constraints.
///
/// Enforces the group-count limit plus the timing and size rules: each
/// window must satisfy `0 <= start < stop <= 100` and every group must
/// have at least one object. The first violation rejects the roster.
pub fn validate_roster(groups: &[GroupDefinition]) -> SimResult<()> {
    if groups.len() > MAX_GROUPS {
        return Err(SimError::TooManyGroups {
            count: groups.len(),
            max: MAX_GROUPS,
        });
    }

    for group in groups {
        if group.start_percent < 0.0 {
            return Err(roster_violation(group, "start_percent must be >= 0"));
        }
        if group.stop_percent > 100.0 {
            return Err(roster_violation(group, "stop_percent must be <= 100"));
        }
        if group.start_percent >= group.stop_percent {
            return Err(roster_violation(
                group,
                "start_percent must be before stop_percent",
            ));
        }
        if group.group_size == 0 {
            return Err(roster_violation(group, "group_size must be positive"));
        }
    }
    Ok(())
}

fn roster_violation(group: &GroupDefinition, rule: &str) -> SimError {
    SimError::InvalidBatch(FtError::InvalidGroup {
        group_id: group.group_id,
        rule: rule.to_string(),
    })
}

/// Headline figures for a roster: counts, window extremes, size spread.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterSummary {
    /// Number of groups.
    pub num_groups: usize,
    /// Total object count across all groups.
    pub total_objects: u64,
    /// Earliest window start across the roster.
    pub earliest_start: f64,
    /// Latest window stop across the roster.
    pub latest_stop: f64,
    /// Mean group size.
    pub avg_group_size: f64,
    /// Smallest group size.
    pub min_group_size: u32,
    /// Largest group size.
    pub max_group_size: u32,
}

impl RosterSummary {
    /// Summarize a roster; `None` when it is empty.
    pub fn from_groups(groups: &[GroupDefinition]) -> Option<Self> {
        if groups.is_empty() {
            return None;
        }

        let total_objects: u64 = groups.iter().map(|g| u64::from(g.group_size)).sum();
        let earliest_start = groups
            .iter()
            .map(|g| g.start_percent)
            .fold(f64::INFINITY, f64::min);
        let latest_stop = groups
            .iter()
            .map(|g| g.stop_percent)
            .fold(f64::NEG_INFINITY, f64::max);
        let min_group_size = groups.iter().map(|g| g.group_size).min()?;
        let max_group_size = groups.iter().map(|g| g.group_size).max()?;

        Some(Self {
            num_groups: groups.len(),
            total_objects,
            earliest_start,
            latest_stop,
            avg_group_size: total_objects as f64 / groups.len() as f64,
            min_group_size,
            max_group_size,
        })
    }
}
