use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use ft_sim::schedule::RosterSummary;

pub fn run(csv: &Path, minutes: Option<f64>) -> Result<(), String> {
    let groups = super::load_roster(csv)?;

    println!(
        "  {} {} {}",
        "Roster".bold(),
        csv.display(),
        "(all validation checks passed)".dimmed()
    );
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Group", "Size", "Start %", "Stop %", "North", "East", "Down", "Category",
    ]);
    for group in &groups {
        table.add_row(vec![
            group.group_id.to_string(),
            group.group_size.to_string(),
            group.start_percent.to_string(),
            group.stop_percent.to_string(),
            group.center_north.to_string(),
            group.center_east.to_string(),
            group.center_down.to_string(),
            group.category.to_string(),
        ]);
    }
    println!("{table}");
    println!();

    if let Some(summary) = RosterSummary::from_groups(&groups) {
        println!("  {}", "Summary".bold().underline());
        println!("  Groups:           {}", summary.num_groups);
        println!("  Total objects:    {}", summary.total_objects);
        println!("  Earliest start:   {}%", summary.earliest_start);
        println!("  Latest stop:      {}%", summary.latest_stop);
        println!("  Avg group size:   {:.1}", summary.avg_group_size);
        println!(
            "  Group size range: {} - {}",
            summary.min_group_size, summary.max_group_size
        );
    } else {
        println!("  (empty roster)");
    }

    if let Some(total_minutes) = minutes {
        println!();
        println!("  {} ({total_minutes} minutes total)", "Schedule".bold().underline());
        for group in &groups {
            let start_min = group.start_percent / 100.0 * total_minutes;
            let stop_min = group.stop_percent / 100.0 * total_minutes;
            println!(
                "  Group {}: {:.1} - {:.1} min (duration {:.1} min, {} objects)",
                group.group_id,
                start_min,
                stop_min,
                stop_min - start_min,
                group.group_size
            );
        }
    }

    Ok(())
}
