use std::path::{Path, PathBuf};

use colored::Colorize;
use ft_convert::WorldEntityConverter;

pub fn run(csv_files: &[PathBuf], out_dir: &Path) -> Result<(), String> {
    let mut converter = WorldEntityConverter::new(out_dir);
    let conversion = converter
        .convert_csv_many(csv_files)
        .map_err(|e| e.to_string())?;

    println!(
        "  {} {} entities from {} table{}",
        "Converted".bold(),
        conversion.entities.len(),
        csv_files.len(),
        if csv_files.len() == 1 { "" } else { "s" }
    );
    println!();

    for (key, path) in &conversion.files {
        println!("  G_{key} -> {}", path.display());
    }
    println!();
    println!("  Consolidated: {}", conversion.consolidated.display());

    Ok(())
}
