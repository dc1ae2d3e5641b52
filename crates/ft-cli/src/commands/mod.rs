pub mod convert;
pub mod simulate;
pub mod timeline;
pub mod validate;

use std::path::Path;

use ft_core::{GroupDefinition, table};
use ft_sim::schedule;

/// Load a group table and run batch plus roster validation.
fn load_roster(path: &Path) -> Result<Vec<GroupDefinition>, String> {
    let groups = table::read_groups(path).map_err(|e| e.to_string())?;
    ft_core::validate_groups(&groups).map_err(|e| e.to_string())?;
    schedule::validate_roster(&groups).map_err(|e| e.to_string())?;
    Ok(groups)
}
