use std::fs;
use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use ft_core::table;
use ft_sim::{SimConfig, SpatialGroupSimulator};

pub fn run(
    csv: &Path,
    points: usize,
    seed: u64,
    out_dir: &Path,
    prefix: Option<&str>,
) -> Result<(), String> {
    let config = SimConfig::default()
        .with_num_time_points(points)
        .with_seed(seed);
    let simulator = SpatialGroupSimulator::from_csv(csv, config).map_err(|e| e.to_string())?;

    let (objects, samples) = simulator.run();
    let summary = simulator.summary(&objects, &samples);

    println!(
        "  {} {} {}",
        "Simulation".bold(),
        csv.display(),
        format!("({points} time points, seed={seed})").dimmed()
    );
    println!(
        "  {} groups, {} objects, {} trajectory samples",
        summary.total_groups, summary.total_objects, summary.total_trajectory_samples
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Group", "Objects"]);
    for (group_id, count) in &summary.objects_per_group {
        table.add_row(vec![group_id.to_string(), count.to_string()]);
    }
    println!("{table}");
    println!();

    if let Some(travel) = &summary.travel_distance {
        println!("  {}", "Travel distance".bold().underline());
        println!("  min:  {:.2} m", travel.min);
        println!("  max:  {:.2} m", travel.max);
        println!("  mean: {:.2} m", travel.mean);
        if let Some(std) = travel.std {
            println!("  std:  {std:.2} m");
        }
        println!();
    }

    let files = write_bundle(&simulator, &objects, &samples, &summary, out_dir, prefix)?;
    println!("  {}", "Output files".bold().underline());
    for file in files {
        println!("  {file}");
    }

    Ok(())
}

/// Write the output bundle: input groups, objects, trajectories, summary.
fn write_bundle(
    simulator: &SpatialGroupSimulator,
    objects: &[ft_core::SimulatedObject],
    samples: &[ft_core::TrajectorySample],
    summary: &ft_sim::SimulationSummary,
    out_dir: &Path,
    prefix: Option<&str>,
) -> Result<Vec<String>, String> {
    fs::create_dir_all(out_dir)
        .map_err(|e| format!("cannot create {}: {e}", out_dir.display()))?;

    let prefix = match prefix {
        Some(p) => p.to_string(),
        None => chrono::Local::now().format("%Y%m%d_%H%M").to_string(),
    };

    let groups_path = out_dir.join(format!("{prefix}_input_groups.csv"));
    table::write_groups(&groups_path, simulator.groups()).map_err(|e| e.to_string())?;

    let objects_path = out_dir.join(format!("{prefix}_objects.csv"));
    table::write_objects(&objects_path, objects).map_err(|e| e.to_string())?;

    let samples_path = out_dir.join(format!("{prefix}_trajectories.csv"));
    table::write_samples(&samples_path, samples).map_err(|e| e.to_string())?;

    let summary_path = out_dir.join(format!("{prefix}_summary.json"));
    let json = serde_json::to_string_pretty(summary)
        .map_err(|e| format!("cannot serialize summary: {e}"))?;
    fs::write(&summary_path, json)
        .map_err(|e| format!("cannot write {}: {e}", summary_path.display()))?;

    Ok(vec![
        groups_path.display().to_string(),
        objects_path.display().to_string(),
        samples_path.display().to_string(),
        summary_path.display().to_string(),
    ])
}
