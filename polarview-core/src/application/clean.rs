// polarview-core/src/application/clean.rs

use std::fs;
use std::path::Path;

use crate::error::PolarViewError;
use crate::infrastructure::csv::export::{DENSITY_FILE, MAP_FILE, POLARIZATION_FILE};

/// Removes the three output tables from `out_dir`. Missing files are fine;
/// anything at those paths that is not a regular file is refused.
/// Returns the names actually removed.
pub fn clean_outputs(out_dir: &Path) -> Result<Vec<&'static str>, PolarViewError> {
    tracing::info!(out_dir = %out_dir.display(), "Removing pipeline output artifacts");

    let mut removed = Vec::new();
    for name in [DENSITY_FILE, POLARIZATION_FILE, MAP_FILE] {
        let path = out_dir.join(name);
        if !path.exists() {
            continue;
        }
        if !path.is_file() {
            return Err(PolarViewError::UnsafeArtifact(path.display().to_string()));
        }
        fs::remove_file(&path)?;
        removed.push(name);
    }
    Ok(removed)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_clean_removes_only_the_artifacts() {
        let dir = tempdir().unwrap();
        for name in [DENSITY_FILE, POLARIZATION_FILE, MAP_FILE] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        fs::write(dir.path().join("notes.txt"), "keep me").unwrap();

        let removed = clean_outputs(dir.path()).unwrap();

        assert_eq!(removed.len(), 3);
        assert!(!dir.path().join(DENSITY_FILE).exists());
        assert!(dir.path().join("notes.txt").exists());
    }

    #[test]
    fn test_clean_is_a_noop_without_artifacts() {
        let dir = tempdir().unwrap();
        assert!(clean_outputs(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_clean_refuses_directories() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(DENSITY_FILE)).unwrap();
        assert!(matches!(
            clean_outputs(dir.path()),
            Err(PolarViewError::UnsafeArtifact(_))
        ));
    }
}
