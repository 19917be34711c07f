// polarview-core/src/infrastructure/csv/votes.rs

use std::path::PathBuf;

use csv::ReaderBuilder;
use tracing::info;

use crate::domain::legislature::member::RawMemberVote;
use crate::error::PolarViewError;
use crate::infrastructure::csv::{csv_error, require_columns};
use crate::infrastructure::error::InfrastructureError;
use crate::ports::source::VoteSource;

const REQUIRED_COLUMNS: [&str; 4] = ["congress", "state_abbrev", "party_code", "nominate_dim1"];

/// Reads the member-vote table from a VoteView-style CSV export. Only the
/// four required columns are projected; extra columns are ignored at load.
pub struct CsvVoteSource {
    path: PathBuf,
}

impl CsvVoteSource {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl VoteSource for CsvVoteSource {
    fn load(&self) -> Result<Vec<RawMemberVote>, PolarViewError> {
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

        let mut rows = Vec::new();
        for record in reader.deserialize::<RawMemberVote>() {
            rows.push(record.map_err(|e| csv_error(&self.path, e))?);
        }

        info!(rows = rows.len(), path = %self.path.display(), "Loaded member-vote table");
        Ok(rows)
    }
}
