// polarview/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "polarview")]
#[command(about = "Congressional polarization data preparation pipeline", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🚀 Runs the pipeline (Load -> Clean -> Aggregate -> Export)
    Run {
        /// Member-vote CSV (VoteView export)
        #[arg(long)]
        votes: PathBuf,

        /// Hex-grid CSV (one cell per state)
        #[arg(long)]
        hexmap: PathBuf,

        /// Directory receiving the three output tables
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// 🧹 Removes the output tables
    Clean {
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// 🔍 Prints the header and first rows of a produced table
    Inspect {
        /// CSV file to inspect
        #[arg(long)]
        file: PathBuf,

        /// Number of sample rows to display
        #[arg(long, default_value = "5")]
        limit: usize,
    },
}
