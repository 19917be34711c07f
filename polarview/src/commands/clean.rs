// polarview/src/commands/clean.rs
//
// USE CASE: Remove the output tables.

use std::path::PathBuf;

use polarview_core::application::clean_outputs;

pub fn execute(out_dir: PathBuf) -> anyhow::Result<()> {
    let removed = clean_outputs(&out_dir)?;

    if removed.is_empty() {
        println!("   Nothing to remove.");
    }
    for name in removed {
        println!("   🗑️  Artifact removed: {}", name);
    }
    Ok(())
}
