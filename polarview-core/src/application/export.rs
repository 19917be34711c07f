// polarview-core/src/application/export.rs

use std::path::Path;

use tracing::info;

use crate::application::pipeline::PipelineOutput;
use crate::error::PolarViewError;
use crate::infrastructure::csv::export::{
    DENSITY_FILE, MAP_FILE, POLARIZATION_FILE, density_csv, map_csv, polarization_csv,
};
use crate::infrastructure::fs::atomic_write;

/// Writes the three output tables into `out_dir`. Each file is committed
/// atomically, so an aborted run never leaves a half-written table.
pub fn write_outputs(output: &PipelineOutput, out_dir: &Path) -> Result<(), PolarViewError> {
    atomic_write(out_dir.join(DENSITY_FILE), &density_csv(&output.density)?)?;
    atomic_write(
        out_dir.join(POLARIZATION_FILE),
        &polarization_csv(&output.polarization)?,
    )?;
    atomic_write(out_dir.join(MAP_FILE), &map_csv(&output.map)?)?;

    info!(out_dir = %out_dir.display(), "Output tables written");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_outputs_creates_all_three_tables() {
        let dir = tempdir().unwrap();
        let output = PipelineOutput {
            density: Vec::new(),
            polarization: Vec::new(),
            map: Vec::new(),
        };

        write_outputs(&output, dir.path()).unwrap();

        for name in [DENSITY_FILE, POLARIZATION_FILE, MAP_FILE] {
            let path = dir.path().join(name);
            assert!(path.is_file(), "missing output {}", name);
            // Header row present even with no data
            let content = std::fs::read_to_string(path).unwrap();
            assert_eq!(content.lines().count(), 1);
        }
    }
}
