//! Spatial group simulation for Flocktrace.
//!
//! Takes a validated batch of [`ft_core::GroupDefinition`]s and produces
//! randomized but statistically controlled objects plus time-sampled,
//! linearly interpolated trajectories. All randomness flows through an
//! explicit caller-supplied [`rand::rngs::StdRng`], so a seed fully
//! determines the output.

/// Configuration for a simulation run.
pub mod config;
/// Error types for the simulation crate.
pub mod error;
/// Low-level random draws: Gaussian offsets, travel distances, directions.
pub mod sampling;
/// Roster-level validation and summary (group count limits).
pub mod schedule;
/// The spatial group simulator.
pub mod simulator;
/// Aggregate statistics over one generation run.
pub mod summary;
/// Activity timeline: sample grid, activity matrix, overlap analysis.
pub mod timeline;

/// Re-export of [`config::SimConfig`].
pub use config::SimConfig;
/// Re-exports of [`error::SimError`] and [`error::SimResult`].
pub use error::{SimError, SimResult};
/// Re-export of [`simulator::SpatialGroupSimulator`].
pub use simulator::SpatialGroupSimulator;
/// Re-export of [`summary::SimulationSummary`].
pub use summary::SimulationSummary;
/// Re-export of [`timeline::ActivityTimeline`].
pub use timeline::ActivityTimeline;
