/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of evenly spaced sample times across the [0, 100] duration.
    pub num_time_points: usize,
    /// RNG seed for deterministic generation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_time_points: 100,
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Set the number of sample times on the trajectory grid.
    pub fn with_num_time_points(mut self, num_time_points: usize) -> Self {
        self.num_time_points = num_time_points;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = SimConfig::default();
        assert_eq!(config.num_time_points, 100);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn config_builder_chain() {
        let config = SimConfig::default().with_num_time_points(10).with_seed(7);
        assert_eq!(config.num_time_points, 10);
        assert_eq!(config.seed, 7);
    }
}
