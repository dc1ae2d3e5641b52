use std::collections::HashMap;
use std::path::Path;

use ft_core::{GroupDefinition, SimulatedObject, TrajectorySample, table, validate_groups};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::SimConfig;
use crate::error::SimResult;
use crate::sampling;
use crate::summary::SimulationSummary;
use crate::timeline;

/// Generates objects and time-sampled trajectories for a batch of groups.
///
/// Construction validates the batch wholesale; a simulator that exists
/// holds only valid groups. Generation itself is a pure function of the
/// groups, the configuration, and the caller's RNG state: two simulators
/// fed the same seed produce identical tables.
#[derive(Debug, Clone)]
pub struct SpatialGroupSimulator {
    groups: Vec<GroupDefinition>,
    config: SimConfig,
}

impl SpatialGroupSimulator {
    /// Validate the batch and build a simulator.
    ///
    /// Any row violation rejects the whole batch; there is no partial
    /// acceptance.
    pub fn new(groups: Vec<GroupDefinition>, config: SimConfig) -> SimResult<Self> {
        validate_groups(&groups)?;
        Ok(Self { groups, config })
    }

    /// Load the group table from a CSV file and build a simulator.
    pub fn from_csv(path: &Path, config: SimConfig) -> SimResult<Self> {
        let groups = table::read_groups(path)?;
        Self::new(groups, config)
    }

    /// The validated group batch.
    pub fn groups(&self) -> &[GroupDefinition] {
        &self.groups
    }

    /// The run configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Generate every group's objects.
    ///
    /// Per object the draws consume the RNG in a fixed order — placement
    /// offset (north, east, down), travel distance, direction (north,
    /// east, down) — so a seed determines the whole batch. Object ids are
    /// assigned from a running counter starting at 1, in group order then
    /// within-group order, never reset between groups.
    pub fn generate_objects(&self, rng: &mut StdRng) -> Vec<SimulatedObject> {
        let mut objects = Vec::new();
        let mut next_id: u32 = 1;

        for group in &self.groups {
            let center = group.center();
            for _ in 0..group.group_size {
                let start = center + sampling::gaussian_offset(rng, group.spread_std);
                let distance =
                    sampling::travel_distance(rng, group.mean_travel_distance, group.travel_std);
                let direction = sampling::unit_direction(rng);
                let end = start + direction * distance;

                objects.push(SimulatedObject::new(
                    next_id,
                    group.group_id,
                    group.category,
                    start,
                    end,
                    distance,
                ));
                next_id += 1;
            }
        }
        objects
    }

    /// Time-sample every object's path across its group's active window.
    ///
    /// The sample grid is `num_time_points` evenly spaced times over
    /// [0, 100]. Each object keeps the grid times inside its window and
    /// always gets samples at the exact window boundaries, even when they
    /// miss the grid. Positions are linearly interpolated between start
    /// and end.
    pub fn generate_trajectories(&self, objects: &[SimulatedObject]) -> Vec<TrajectorySample> {
        let grid = timeline::time_points(self.config.num_time_points);
        let windows: HashMap<u32, (f64, f64)> = self
            .groups
            .iter()
            .map(|g| (g.group_id, (g.start_percent, g.stop_percent)))
            .collect();

        let mut samples = Vec::new();
        for object in objects {
            let (start_percent, stop_percent) = match windows.get(&object.group_id) {
                Some(window) => *window,
                None => continue,
            };

            let mut times: Vec<f64> = grid
                .iter()
                .copied()
                .filter(|t| start_percent <= *t && *t <= stop_percent)
                .collect();
            if times.first() != Some(&start_percent) {
                times.insert(0, start_percent);
            }
            if times.last() != Some(&stop_percent) {
                times.push(stop_percent);
            }

            let start = object.start();
            let end = object.end();
            let span = stop_percent - start_percent;

            for t in times {
                let alpha = if span == 0.0 {
                    0.0
                } else {
                    (t - start_percent) / span
                };
                let position = start + (end - start) * alpha;

                samples.push(TrajectorySample {
                    object_id: object.object_id,
                    group_id: object.group_id,
                    category: object.category,
                    time_percent: t,
                    north: position.north,
                    east: position.east,
                    down: position.down,
                });
            }
        }
        samples
    }

    /// Run generation end to end with an RNG seeded from the config.
    pub fn run(&self) -> (Vec<SimulatedObject>, Vec<TrajectorySample>) {
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        let objects = self.generate_objects(&mut rng);
        let samples = self.generate_trajectories(&objects);
        (objects, samples)
    }

    /// Aggregate statistics for a finished run.
    pub fn summary(
        &self,
        objects: &[SimulatedObject],
        samples: &[TrajectorySample],
    ) -> SimulationSummary {
        SimulationSummary::compute(&self.groups, self.config.num_time_points, objects, samples)
    }
}
