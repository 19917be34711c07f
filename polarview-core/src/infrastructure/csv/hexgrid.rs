// polarview-core/src/infrastructure/csv/hexgrid.rs

use std::path::PathBuf;

use csv::ReaderBuilder;
use tracing::info;

use crate::domain::geo::HexCell;
use crate::error::PolarViewError;
use crate::infrastructure::csv::{csv_error, require_columns};
use crate::infrastructure::error::InfrastructureError;
use crate::ports::source::HexGridSource;

const REQUIRED_COLUMNS: [&str; 4] = ["StateAbbr", "StateName", "HexRow", "HexCol"];

/// Reads the hex-grid table. Whatever extra columns the source file carries
/// (old data values, notes) are discarded here; only the four named columns
/// reach the pipeline.
pub struct CsvHexGridSource {
    path: PathBuf,
}

impl CsvHexGridSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl HexGridSource for CsvHexGridSource {
    fn load(&self) -> Result<Vec<HexCell>, PolarViewError> {
        if !self.path.exists() {
            return Err(
                InfrastructureError::InputNotFound(self.path.display().to_string()).into(),
            );
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .map_err(|e| csv_error(&self.path, e))?;

        let headers = reader.headers().map_err(|e| csv_error(&self.path, e))?.clone();
        require_columns(&self.path, &headers, &REQUIRED_COLUMNS)?;

        let mut cells = Vec::new();
        for record in reader.deserialize::<HexCell>() {
            cells.push(record.map_err(|e| csv_error(&self.path, e))?);
        }

        info!(cells = cells.len(), path = %self.path.display(), "Loaded hex-grid table");
        Ok(cells)
    }
}
