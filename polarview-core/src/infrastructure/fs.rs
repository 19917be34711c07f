// polarview-core/src/infrastructure/fs.rs

use std::io::Write;
use std::path::Path;

use crate::infrastructure::error::InfrastructureError;

/// Writes `content` to `path` atomically: the bytes land in a temporary
/// file in the target directory first, which is then persisted (renamed)
/// over the destination. A failed run therefore never leaves a partially
/// written output table behind.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    // Temp file in the same directory so the rename stays on one filesystem
    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content)?;
    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}
