use ft_core::GroupDefinition;

/// Evenly spaced sample times across the normalized [0, 100] duration.
///
/// Zero points gives an empty grid; a single point sits at 0. Both ends
/// are included otherwise.
pub fn time_points(num_points: usize) -> Vec<f64> {
    match num_points {
        0 => Vec::new(),
        1 => vec![0.0],
        n => (0..n)
            .map(|i| 100.0 * i as f64 / (n - 1) as f64)
            .collect(),
    }
}

/// Ids of the groups whose window contains `time_percent` (inclusive).
pub fn active_groups_at(groups: &[GroupDefinition], time_percent: f64) -> Vec<u32> {
    groups
        .iter()
        .filter(|g| g.contains_time(time_percent))
        .map(|g| g.group_id)
        .collect()
}

/// Unordered pairs of group ids whose active windows overlap.
///
/// Brute-force pairwise comparison; rosters are capped at a handful of
/// groups, so quadratic cost is irrelevant. Two windows overlap when each
/// starts before the other stops.
pub fn overlapping_pairs(groups: &[GroupDefinition]) -> Vec<(u32, u32)> {
    let mut pairs = Vec::new();
    for (i, a) in groups.iter().enumerate() {
        for b in &groups[i + 1..] {
            if a.start_percent < b.stop_percent && b.start_percent < a.stop_percent {
                pairs.push((a.group_id, b.group_id));
            }
        }
    }
    pairs
}

/// Binary activity matrix: one row per group, one column per sample time.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityTimeline {
    group_ids: Vec<u32>,
    times: Vec<f64>,
    matrix: Vec<Vec<bool>>,
}

/// Aggregate concurrency figures across a sampled timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcurrencyStats {
    /// Largest number of simultaneously active groups.
    pub max_concurrent: usize,
    /// Smallest number of simultaneously active groups.
    pub min_concurrent: usize,
    /// Mean number of active groups per sample.
    pub avg_concurrent: f64,
    /// Number of samples with no active group.
    pub samples_with_zero: usize,
    /// Number of samples at the maximum concurrency.
    pub samples_at_max: usize,
}

impl ActivityTimeline {
    /// Build the activity matrix for a roster over `num_points` samples.
    ///
    /// Membership uses the same inclusive window test as trajectory
    /// sampling, so a group is active at both of its window boundaries.
    pub fn build(groups: &[GroupDefinition], num_points: usize) -> Self {
        let times = time_points(num_points);
        let matrix = groups
            .iter()
            .map(|g| times.iter().map(|t| g.contains_time(*t)).collect())
            .collect();
        Self {
            group_ids: groups.iter().map(|g| g.group_id).collect(),
            times,
            matrix,
        }
    }

    /// Group ids in row order.
    pub fn group_ids(&self) -> &[u32] {
        &self.group_ids
    }

    /// Sample times in column order.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Whether the group at `row` is active at the sample at `column`.
    pub fn is_active(&self, row: usize, column: usize) -> bool {
        self.matrix
            .get(row)
            .and_then(|r| r.get(column))
            .copied()
            .unwrap_or(false)
    }

    /// Number of active groups at each sample time.
    pub fn concurrency(&self) -> Vec<usize> {
        (0..self.times.len())
            .map(|col| self.matrix.iter().filter(|row| row[col]).count())
            .collect()
    }

    /// Aggregate concurrency statistics; zeroed for an empty grid.
    pub fn stats(&self) -> ConcurrencyStats {
        let concurrency = self.concurrency();
        if concurrency.is_empty() {
            return ConcurrencyStats {
                max_concurrent: 0,
                min_concurrent: 0,
                avg_concurrent: 0.0,
                samples_with_zero: 0,
                samples_at_max: 0,
            };
        }

        let max = concurrency.iter().copied().max().unwrap_or(0);
        let min = concurrency.iter().copied().min().unwrap_or(0);
        let total: usize = concurrency.iter().sum();

        ConcurrencyStats {
            max_concurrent: max,
            min_concurrent: min,
            avg_concurrent: total as f64 / concurrency.len() as f64,
            samples_with_zero: concurrency.iter().filter(|c| **c == 0).count(),
            samples_at_max: concurrency.iter().filter(|c| **c == max).count(),
        }
    }
}
