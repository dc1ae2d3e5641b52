//! CLI frontend for the Flocktrace trajectory generator.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "ft",
    about = "Flocktrace — synthetic group trajectories for simulation worlds",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a group table and print the roster summary
    Validate {
        /// Path to the group CSV file
        csv: PathBuf,

        /// Total duration in minutes; prints absolute per-group schedules
        #[arg(long)]
        minutes: Option<f64>,
    },

    /// Generate objects and trajectories, writing a timestamped output bundle
    Simulate {
        /// Path to the group CSV file
        csv: PathBuf,

        /// Number of sample times across the normalized duration
        #[arg(short, long, default_value = "100")]
        points: usize,

        /// RNG seed for deterministic generation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Directory for output files
        #[arg(short, long, default_value = "results")]
        out_dir: PathBuf,

        /// Filename prefix (default: current local timestamp)
        #[arg(long)]
        prefix: Option<String>,
    },

    /// Display the group activity timeline and overlap analysis
    Timeline {
        /// Path to the group CSV file
        csv: PathBuf,

        /// Number of sample times across the normalized duration
        #[arg(short, long, default_value = "20")]
        points: usize,
    },

    /// Convert trajectory tables to WORLD_ENTITY files
    Convert {
        /// Path(s) to trajectory CSV file(s); keys stay unique across all
        #[arg(required = true)]
        csv: Vec<PathBuf>,

        /// Base directory for trajectory outputs
        #[arg(short, long, default_value = "trajectories")]
        out_dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { csv, minutes } => commands::validate::run(&csv, minutes),
        Commands::Simulate {
            csv,
            points,
            seed,
            out_dir,
            prefix,
        } => commands::simulate::run(&csv, points, seed, &out_dir, prefix.as_deref()),
        Commands::Timeline { csv, points } => commands::timeline::run(&csv, points),
        Commands::Convert { csv, out_dir } => commands::convert::run(&csv, &out_dir),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
