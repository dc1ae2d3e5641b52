use std::path::Path;

use ft_core::TrajectorySample;
use serde::Serialize;

/// One `WORLD_ENTITY` record: name, initial position, and the trajectory
/// file it references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorldEntityDescriptor {
    /// Entity name, `G_<key>`.
    pub name: String,
    /// Starting position as `"north, east, down"`, full input precision.
    pub position: String,
    /// Relative path of the per-object trajectory file.
    pub trajectory_file: String,
}

impl WorldEntityDescriptor {
    /// Build a descriptor from an entity key and the object's first sample.
    pub fn new(key: u32, first_sample: &TrajectorySample, output_root: &Path) -> Self {
        let root = output_root.display().to_string();
        let root = root.trim_start_matches("./").trim_end_matches('/');
        Self {
            name: format!("G_{key}"),
            position: format!(
                "{}, {}, {}",
                first_sample.north, first_sample.east, first_sample.down
            ),
            trajectory_file: format!("./{root}/G/G_{key}_.txt"),
        }
    }

    /// Render the fixed-grammar descriptor block.
    ///
    /// `scale` is intentionally valueless; the consumer tolerates the
    /// empty assignment.
    pub fn render(&self) -> String {
        format!(
            "WORLD_ENTITY {{\n    name = {}\n    position = \"{}\"\n    scale =\n    stateAttsLoadFilename = '{}'\n}}",
            self.name, self.position, self.trajectory_file
        )
    }
}
