use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use ft_sim::ActivityTimeline;
use ft_sim::timeline::overlapping_pairs;

pub fn run(csv: &Path, points: usize) -> Result<(), String> {
    let groups = super::load_roster(csv)?;

    if groups.is_empty() {
        println!("  No groups found. Nothing to analyze.");
        return Ok(());
    }

    let timeline = ActivityTimeline::build(&groups, points);

    println!(
        "  {} {} {}",
        "Timeline".bold(),
        csv.display(),
        format!("({points} time points)").dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    let mut header = vec!["Time %".to_string()];
    header.extend(timeline.group_ids().iter().map(|id| format!("Group {id}")));
    header.push("Active".to_string());
    table.set_header(header);

    let concurrency = timeline.concurrency();
    for (col, time) in timeline.times().iter().enumerate() {
        let mut row = vec![format!("{time:.1}")];
        for group_row in 0..timeline.group_ids().len() {
            row.push(if timeline.is_active(group_row, col) {
                "1".to_string()
            } else {
                "0".to_string()
            });
        }
        row.push(concurrency[col].to_string());
        table.add_row(row);
    }
    println!("{table}");
    println!();

    let overlaps = overlapping_pairs(&groups);
    if overlaps.is_empty() {
        println!("  No overlapping groups.");
    } else {
        println!("  {}", "Overlapping groups".bold().underline());
        for (a, b) in &overlaps {
            println!("  Group {a} <-> Group {b}");
        }
    }
    println!();

    let stats = timeline.stats();
    println!("  {}", "Concurrency".bold().underline());
    println!("  max simultaneous: {}", stats.max_concurrent);
    println!("  min simultaneous: {}", stats.min_concurrent);
    println!("  average:          {:.2}", stats.avg_concurrent);
    println!("  idle samples:     {}", stats.samples_with_zero);
    println!("  samples at max:   {}", stats.samples_at_max);

    Ok(())
}
