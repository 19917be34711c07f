// polarview/src/commands/run.rs
//
// USE CASE: Run the batch pipeline and export the three tables.

use std::path::PathBuf;

use anyhow::Context;
use polarview_core::application::{run_pipeline, write_outputs};
use polarview_core::infrastructure::csv::hexgrid::CsvHexGridSource;
use polarview_core::infrastructure::csv::votes::CsvVoteSource;

pub fn execute(votes: PathBuf, hexmap: PathBuf, out_dir: PathBuf) -> anyhow::Result<()> {
    let start = std::time::Instant::now();

    println!("⚙️  Preparing pipeline...");
    println!("   Votes:   {}", votes.display());
    println!("   Hex map: {}", hexmap.display());

    let votes_source = CsvVoteSource::new(votes);
    let hex_source = CsvHexGridSource::new(hexmap);

    let (output, result) = run_pipeline(&votes_source, &hex_source)?;

    tracing::debug!(out_dir = %out_dir.display(), "Writing output tables");
    write_outputs(&output, &out_dir)
        .with_context(|| format!("Failed to write output tables into {:?}", out_dir))?;

    match result.window {
        Some((first, last)) => println!("   Scope: terms {} to {}", first, last),
        None => println!("   Scope: empty (input carries no terms)"),
    }
    println!(
        "   Rows: {} cleaned | {} density | {} polarization | {} map",
        result.cleaned_rows, result.density_rows, result.polarization_rows, result.map_rows
    );

    println!("\n✨ SUCCESS! Pipeline finished in {:.2?}", start.elapsed());
    Ok(())
}
