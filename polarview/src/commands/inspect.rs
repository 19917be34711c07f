// polarview/src/commands/inspect.rs
//
// USE CASE: Inspect a produced table (header + sample rows).

use std::path::PathBuf;

use csv::ReaderBuilder;

pub fn execute(file: PathBuf, limit: usize) -> anyhow::Result<()> {
    if !file.exists() {
        anyhow::bail!(
            "❌ Table not found at: {}\n👉 Have you run 'polarview run'?",
            file.display()
        );
    }

    let mut reader = ReaderBuilder::new().has_headers(true).from_path(&file)?;
    let headers = reader.headers()?.clone();

    println!("\n🔍 Inspecting Table: '{}'", file.display());
    println!(
        "   Columns: [{}]",
        headers.iter().collect::<Vec<_>>().join(", ")
    );
    println!("   --- Rows (Limit {}) ---", limit);

    for record in reader.records().take(limit) {
        let record = record?;
        println!("   ➜ {}", record.iter().collect::<Vec<_>>().join(" | "));
    }

    Ok(())
}
