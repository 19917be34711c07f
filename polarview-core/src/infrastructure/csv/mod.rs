// polarview-core/src/infrastructure/csv/mod.rs

pub mod export;
pub mod hexgrid;
pub mod votes;

use std::path::Path;

use crate::infrastructure::error::InfrastructureError;

/// Wraps a csv error with the offending file path.
pub(crate) fn csv_error(path: &Path, source: csv::Error) -> InfrastructureError {
    InfrastructureError::Csv {
        path: path.display().to_string(),
        source,
    }
}

/// Structural check: a required column missing from the header row is fatal.
/// Serde would default the field to `None` and silently empty the outputs.
pub(crate) fn require_columns(
    path: &Path,
    headers: &csv::StringRecord,
    required: &[&'static str],
) -> Result<(), InfrastructureError> {
    for column in required {
        if !headers.iter().any(|h| h == *column) {
            return Err(InfrastructureError::MissingColumn {
                path: path.display().to_string(),
                column,
            });
        }
    }
    Ok(())
}
