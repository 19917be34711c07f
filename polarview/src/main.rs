// polarview/src/main.rs

mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug polarview run ... to see the details
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            votes,
            hexmap,
            out_dir,
        } => commands::run::execute(votes, hexmap, out_dir),
        Commands::Clean { out_dir } => commands::clean::execute(out_dir),
        Commands::Inspect { file, limit } => commands::inspect::execute(file, limit),
    }
}
