// polarview-core/src/error.rs

use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

// The domain operations are total: rows failing a cleaning rule are dropped,
// not reported, so every fallible path bottoms out in infrastructure I/O.
#[derive(Error, Debug)]
pub enum PolarViewError {
    // --- INFRASTRUCTURE ERRORS (IO, CSV structure) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- GENERIC / APPLICATION ERRORS ---
    #[error("Internal Error: {0}")]
    InternalError(String),

    #[error("Refusing to remove non-file artifact: {0}")]
    UnsafeArtifact(String),
}

// Manual implementations to keep `?` ergonomic at call sites
impl From<std::io::Error> for PolarViewError {
    fn from(err: std::io::Error) -> Self {
        PolarViewError::Infrastructure(InfrastructureError::Io(err))
    }
}
