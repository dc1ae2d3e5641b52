//! World-entity conversion for Flocktrace.
//!
//! Reformats a trajectory table into the text artifacts an external
//! simulation tool consumes: one tab-delimited trajectory file per object
//! plus one consolidated file of `WORLD_ENTITY { ... }` descriptor blocks.
//! Each distinct object gets a sequential entity key, assigned in a
//! stable, reproducible order.

/// The converter: key assignment, file writing, orchestration.
pub mod converter;
/// The `WORLD_ENTITY` descriptor block.
pub mod descriptor;
/// Error types for the conversion crate.
pub mod error;

/// Re-exports of the converter and its outputs.
pub use converter::{Conversion, TrajectoryRow, WorldEntityConverter};
/// Re-export of [`descriptor::WorldEntityDescriptor`].
pub use descriptor::WorldEntityDescriptor;
/// Re-exports of [`error::ConvertError`] and [`error::ConvertResult`].
pub use error::{ConvertError, ConvertResult};
