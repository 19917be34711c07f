// polarview-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(polarview::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- INPUT TABLES ---
    #[error("Input table not found at '{0}'")]
    #[diagnostic(code(polarview::infra::input_missing))]
    InputNotFound(String),

    #[error("Required column '{column}' missing in '{path}'")]
    #[diagnostic(
        code(polarview::infra::missing_column),
        help("The input must be a headered CSV carrying the expected columns.")
    )]
    MissingColumn { path: String, column: &'static str },

    #[error("CSV Error in '{path}': {source}")]
    #[diagnostic(
        code(polarview::infra::csv),
        help("Check the header row and that numeric columns parse as numbers.")
    )]
    Csv { path: String, source: csv::Error },
}
