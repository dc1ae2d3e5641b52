use std::collections::BTreeMap;

use ft_core::{GroupDefinition, SimulatedObject, TrajectorySample};
use serde::Serialize;

/// Aggregate statistics over one generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    /// Number of groups in the batch.
    pub total_groups: usize,
    /// Number of generated objects.
    pub total_objects: usize,
    /// Configured size of the trajectory sample grid.
    pub num_time_points: usize,
    /// Object count per group id.
    pub objects_per_group: BTreeMap<u32, usize>,
    /// Object count per category.
    pub objects_per_category: BTreeMap<u8, usize>,
    /// Travel-distance spread, absent when no objects were generated.
    pub travel_distance: Option<TravelDistanceStats>,
    /// Total number of trajectory samples.
    pub total_trajectory_samples: usize,
}

/// Travel-distance spread across all generated objects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TravelDistanceStats {
    /// Smallest travel distance.
    pub min: f64,
    /// Largest travel distance.
    pub max: f64,
    /// Mean travel distance.
    pub mean: f64,
    /// Sample standard deviation, absent below two objects.
    pub std: Option<f64>,
}

impl SimulationSummary {
    /// Compute the summary for a finished run.
    pub fn compute(
        groups: &[GroupDefinition],
        num_time_points: usize,
        objects: &[SimulatedObject],
        samples: &[TrajectorySample],
    ) -> Self {
        let mut objects_per_group = BTreeMap::new();
        let mut objects_per_category = BTreeMap::new();
        for object in objects {
            *objects_per_group.entry(object.group_id).or_insert(0) += 1;
            *objects_per_category.entry(object.category).or_insert(0) += 1;
        }

        Self {
            total_groups: groups.len(),
            total_objects: objects.len(),
            num_time_points,
            objects_per_group,
            objects_per_category,
            travel_distance: TravelDistanceStats::compute(objects),
            total_trajectory_samples: samples.len(),
        }
    }
}

impl TravelDistanceStats {
    fn compute(objects: &[SimulatedObject]) -> Option<Self> {
        if objects.is_empty() {
            return None;
        }

        let distances: Vec<f64> = objects.iter().map(|o| o.travel_distance).collect();
        let min = distances.iter().copied().fold(f64::INFINITY, f64::min);
        let max = distances.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = distances.iter().sum::<f64>() / distances.len() as f64;

        // Sample standard deviation (n - 1), undefined for a single object.
        let std = if distances.len() > 1 {
            let sum_sq: f64 = distances.iter().map(|d| (d - mean) * (d - mean)).sum();
            Some((sum_sq / (distances.len() - 1) as f64).sqrt())
        } else {
            None
        };

        Some(Self { min, max, mean, std })
    }
}
